//! # Formstudio CSS Compiler
//!
//! Emits the stylesheet shipped next to an exported form. The output is a
//! fixed template: it styles the class vocabulary the markup compiler
//! emits (field groups, grid rows, buttons, validation feedback) and does
//! not vary with form content.

/// Compile the export stylesheet.
pub fn compile_stylesheet() -> String {
    STYLESHEET.to_string()
}

const STYLESHEET: &str = r#"/* Generated Form Styles */
.form-container {
    max-width: 800px;
    margin: 2rem auto;
    padding: 2rem;
    background: white;
    border-radius: 12px;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

/* Row Layouts */
.form-row {
    display: grid;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.form-row.row-2col {
    grid-template-columns: 1fr 1fr;
}

.form-row.row-3col {
    grid-template-columns: 1fr 1fr 1fr;
}

.form-row.row-4col {
    grid-template-columns: 1fr 1fr 1fr 1fr;
}

.form-column {
    display: flex;
    flex-direction: column;
}

.form-title {
    text-align: center;
    color: #1e293b;
    margin-bottom: 2rem;
    font-weight: 700;
}

.form-group {
    margin-bottom: 1.5rem;
}

.form-label {
    display: block;
    margin-bottom: 0.5rem;
    font-weight: 500;
    color: #374151;
    font-size: 0.875rem;
}

.form-input,
.form-textarea,
.form-select {
    width: 100%;
    padding: 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    font-size: 0.875rem;
    transition: all 0.2s;
    background: white;
}

.form-input:focus,
.form-textarea:focus,
.form-select:focus {
    outline: none;
    border-color: #3b82f6;
    box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1);
}

.form-textarea {
    resize: vertical;
    min-height: 100px;
}

.radio-group,
.checkbox-group {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.radio-item,
.checkbox-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.radio-item input,
.checkbox-item input {
    width: auto;
    margin: 0;
}

.form-button {
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 6px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
    font-size: 0.875rem;
}

.btn-submit {
    background: #3b82f6;
    color: white;
}

.btn-submit:hover {
    background: #2563eb;
    transform: translateY(-1px);
    box-shadow: 0 4px 12px rgba(59, 130, 246, 0.25);
}

.btn-reset {
    background: #6b7280;
    color: white;
    margin-left: 0.5rem;
}

.btn-reset:hover {
    background: #4b5563;
    transform: translateY(-1px);
    box-shadow: 0 4px 12px rgba(107, 114, 128, 0.25);
}

.form-error {
    color: #ef4444;
    font-size: 0.75rem;
    margin-top: 0.25rem;
}

.form-success {
    color: #10b981;
    font-size: 0.875rem;
    text-align: center;
    padding: 1rem;
    background: #f0fdf4;
    border: 1px solid #bbf7d0;
    border-radius: 6px;
    margin-bottom: 1rem;
}

/* Responsive Design */
@media (max-width: 768px) {
    .form-row.row-2col,
    .form-row.row-3col,
    .form-row.row-4col {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 640px) {
    .form-container {
        margin: 1rem;
        padding: 1.5rem;
    }

    .form-button {
        width: 100%;
        margin-left: 0;
        margin-bottom: 0.5rem;
    }

    .radio-group,
    .checkbox-group {
        gap: 0.75rem;
    }

    .form-row {
        gap: 0.75rem;
    }
}
"#;
