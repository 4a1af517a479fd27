use formstudio_model::{Document, Element, FieldKind, Row};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Form title rendered in `<title>` and as the form heading
    pub title: Option<String>,
    /// href of the emitted stylesheet reference
    pub stylesheet_href: String,
    /// src of the emitted validation-script reference
    pub script_src: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: None,
            stylesheet_href: "form-styles.css".to_string(),
            script_src: "form-validation.js".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a form document to a complete HTML page.
pub fn compile_document(document: &Document, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options.clone());
    let title = options.title.as_deref().unwrap_or("");
    let stylesheet_href = escape_attr(&options.stylesheet_href);
    let script_src = escape_attr(&options.script_src);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let page_title = if title.is_empty() {
        "Generated Form"
    } else {
        title
    };
    ctx.add_line(&format!("<title>{}</title>", escape_text(page_title)));
    ctx.add_line(&format!(
        "<link rel=\"stylesheet\" href=\"{stylesheet_href}\">"
    ));
    ctx.dedent();
    ctx.add_line("</head>");
    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"form-container\">");
    ctx.indent();
    ctx.add_line("<form class=\"generated-form\" id=\"generatedForm\" action=\"#\" method=\"POST\">");
    ctx.indent();

    if !title.is_empty() {
        ctx.add_line(&format!(
            "<h2 class=\"form-title\">{}</h2>",
            escape_text(title)
        ));
    }

    for element in &document.elements {
        compile_element(element, &mut ctx);
    }
    for row in &document.rows {
        compile_row(row, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</form>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.add_line(&format!("<script src=\"{script_src}\"></script>"));
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_row(row: &Row, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"form-row {}\">",
        row.layout_class()
    ));
    ctx.indent();
    for slot in &row.slots {
        ctx.add_line("<div class=\"form-column\">");
        ctx.indent();
        for element in slot {
            compile_element(element, ctx);
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_element(element: &Element, ctx: &mut Context) {
    ctx.add_line("<div class=\"form-group\">");
    ctx.indent();

    if !element.kind.is_button() && !element.label.is_empty() {
        let asterisk = if element.required { " *" } else { "" };
        ctx.add_line(&format!(
            "<label class=\"form-label\" for=\"{}\">{}{}</label>",
            escape_attr(&element.id),
            escape_text(&element.label),
            asterisk
        ));
    }

    compile_field(element, ctx);

    ctx.dedent();
    ctx.add_line("</div>");
}

/// Emit the field control. This mapping must stay in lockstep with the
/// canvas renderer's; only the wrapper classes differ.
fn compile_field(element: &Element, ctx: &mut Context) {
    let required = if element.required { " required" } else { "" };
    let id = escape_attr(&element.id);

    match element.kind {
        FieldKind::Textarea => {
            ctx.add_line(&format!(
                "<textarea class=\"form-textarea\" id=\"{id}\" name=\"{id}\" placeholder=\"{}\"{required}></textarea>",
                escape_attr(&element.placeholder)
            ));
        }

        FieldKind::Select => {
            ctx.add_line(&format!(
                "<select class=\"form-select\" id=\"{id}\" name=\"{id}\"{required}>"
            ));
            ctx.indent();
            if !element.placeholder.is_empty() {
                ctx.add_line(&format!(
                    "<option value=\"\">{}</option>",
                    escape_text(&element.placeholder)
                ));
            }
            for option in element.options.iter().flatten() {
                ctx.add_line(&format!(
                    "<option value=\"{}\">{}</option>",
                    escape_attr(option),
                    escape_text(option)
                ));
            }
            ctx.dedent();
            ctx.add_line("</select>");
        }

        FieldKind::Radio => {
            ctx.add_line("<div class=\"radio-group\">");
            ctx.indent();
            for (index, option) in element.options.iter().flatten().enumerate() {
                // Only the first radio carries the required flag.
                let item_required = if element.required && index == 0 {
                    " required"
                } else {
                    ""
                };
                ctx.add_line("<div class=\"radio-item\">");
                ctx.indent();
                ctx.add_line(&format!(
                    "<input type=\"radio\" id=\"{id}_{index}\" name=\"{id}\" value=\"{}\"{item_required}>",
                    escape_attr(option)
                ));
                ctx.add_line(&format!(
                    "<label for=\"{id}_{index}\">{}</label>",
                    escape_text(option)
                ));
                ctx.dedent();
                ctx.add_line("</div>");
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }

        FieldKind::Checkbox => compile_checkbox(element, ctx),

        FieldKind::Submit | FieldKind::Reset => {
            let kind = element.kind.as_str();
            ctx.add_line(&format!(
                "<button type=\"{kind}\" class=\"form-button btn-{kind}\" id=\"{id}\">{}</button>",
                escape_text(&element.label)
            ));
        }

        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Password
        | FieldKind::Number
        | FieldKind::Tel
        | FieldKind::Url
        | FieldKind::File
        | FieldKind::Date
        | FieldKind::Time => {
            ctx.add_line(&format!(
                "<input type=\"{}\" class=\"form-input\" id=\"{id}\" name=\"{id}\" placeholder=\"{}\"{required}>",
                element.kind.as_str(),
                escape_attr(&element.placeholder)
            ));
        }
    }
}

fn compile_checkbox(element: &Element, ctx: &mut Context) {
    let options = element.options.as_deref().unwrap_or(&[]);
    let id = escape_attr(&element.id);

    if options.len() > 1 {
        // Multi-option checkbox groups submit as `id[]` and never mark
        // individual boxes required.
        ctx.add_line("<div class=\"checkbox-group\">");
        ctx.indent();
        for (index, option) in options.iter().enumerate() {
            ctx.add_line("<div class=\"checkbox-item\">");
            ctx.indent();
            ctx.add_line(&format!(
                "<input type=\"checkbox\" id=\"{id}_{index}\" name=\"{id}[]\" value=\"{}\">",
                escape_attr(option)
            ));
            ctx.add_line(&format!(
                "<label for=\"{id}_{index}\">{}</label>",
                escape_text(option)
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }
        ctx.dedent();
        ctx.add_line("</div>");
    } else {
        let required = if element.required { " required" } else { "" };
        let label = options
            .first()
            .map(|o| o.as_str())
            .unwrap_or("Check this box");
        ctx.add_line("<div class=\"checkbox-item\">");
        ctx.indent();
        ctx.add_line(&format!(
            "<input type=\"checkbox\" id=\"{id}\" name=\"{id}\" value=\"yes\"{required}>"
        ));
        ctx.add_line(&format!("<label for=\"{id}\">{}</label>", escape_text(label)));
        ctx.dedent();
        ctx.add_line("</div>");
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
