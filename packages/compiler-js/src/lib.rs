//! # Formstudio JS Compiler
//!
//! Emits the client-side validation script shipped next to an exported
//! form. Like the stylesheet, the output is a fixed template; it is the
//! behavioral contract the exported markup relies on:
//!
//! - submit is intercepted and prior error/success nodes are cleared
//! - every `[required]` field must be non-blank
//! - email, phone and URL inputs are checked against their format rules
//! - each failing field gets an inline `.form-error` node
//! - a `.form-success` banner is shown and auto-dismissed after 5 s

/// Compile the export validation script.
pub fn compile_validation_script() -> String {
    VALIDATION_SCRIPT.to_string()
}

const VALIDATION_SCRIPT: &str = r#"// Generated Form JavaScript
document.addEventListener('DOMContentLoaded', function() {
    const form = document.getElementById('generatedForm');

    if (form) {
        form.addEventListener('submit', function(e) {
            e.preventDefault();

            // Clear previous errors
            clearErrors();

            // Validate form
            if (validateForm()) {
                showSuccess('Form submitted successfully!');
            }
        });
    }

    function validateForm() {
        let isValid = true;
        const requiredFields = form.querySelectorAll('[required]');

        requiredFields.forEach(field => {
            if (!field.value.trim()) {
                showError(field, 'This field is required');
                isValid = false;
            }
        });

        // Email validation
        const emailFields = form.querySelectorAll('input[type="email"]');
        emailFields.forEach(field => {
            if (field.value && !isValidEmail(field.value)) {
                showError(field, 'Please enter a valid email address');
                isValid = false;
            }
        });

        // Phone validation
        const phoneFields = form.querySelectorAll('input[type="tel"]');
        phoneFields.forEach(field => {
            if (field.value && !isValidPhone(field.value)) {
                showError(field, 'Please enter a valid phone number');
                isValid = false;
            }
        });

        // URL validation
        const urlFields = form.querySelectorAll('input[type="url"]');
        urlFields.forEach(field => {
            if (field.value && !isValidURL(field.value)) {
                showError(field, 'Please enter a valid URL');
                isValid = false;
            }
        });

        return isValid;
    }

    function showError(field, message) {
        const formGroup = field.closest('.form-group');
        if (formGroup) {
            const errorElement = document.createElement('div');
            errorElement.className = 'form-error';
            errorElement.textContent = message;
            formGroup.appendChild(errorElement);
        }

        field.style.borderColor = '#ef4444';
    }

    function clearErrors() {
        // Remove error messages
        const errors = form.querySelectorAll('.form-error');
        errors.forEach(error => error.remove());

        // Reset field border colors
        const fields = form.querySelectorAll('.form-input, .form-textarea, .form-select');
        fields.forEach(field => {
            field.style.borderColor = '';
        });

        // Remove success message
        const successMessage = form.querySelector('.form-success');
        if (successMessage) {
            successMessage.remove();
        }
    }

    function showSuccess(message) {
        const successElement = document.createElement('div');
        successElement.className = 'form-success';
        successElement.textContent = message;
        form.insertBefore(successElement, form.firstChild);

        // Auto-hide success message after 5 seconds
        setTimeout(() => {
            successElement.remove();
        }, 5000);
    }

    function isValidEmail(email) {
        const emailRegex = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
        return emailRegex.test(email);
    }

    function isValidPhone(phone) {
        const phoneRegex = /^[\+]?[1-9][\d]{0,15}$/;
        return phoneRegex.test(phone.replace(/[\s\-\(\)]/g, ''));
    }

    function isValidURL(url) {
        try {
            new URL(url);
            return true;
        } catch {
            return false;
        }
    }
});
"#;
