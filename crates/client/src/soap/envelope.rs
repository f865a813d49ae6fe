//! SOAP request envelope rendering

use std::fmt::Write as _;

/// XML namespace shared by all vendor operations.
pub const VENDOR_NAMESPACE: &str = "http://24sevenOffice.com/webservices";

/// One field of a request body: either a text leaf or a nested element.
///
/// Field names come from the vendor schema and are emitted verbatim; only
/// text values are XML-escaped.
#[derive(Debug, Clone)]
pub enum Field {
    Text { name: String, value: String },
    Element { name: String, children: Vec<Field> },
}

impl Field {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text { name: name.into(), value: value.into() }
    }

    pub fn element(name: impl Into<String>, children: Vec<Field>) -> Self {
        Self::Element { name: name.into(), children }
    }

    fn render(&self, out: &mut String) {
        match self {
            Self::Text { name, value } => {
                let _ = write!(out, "<{name}>{}</{name}>", escape(value));
            }
            Self::Element { name, children } => {
                let _ = write!(out, "<{name}>");
                for child in children {
                    child.render(out);
                }
                let _ = write!(out, "</{name}>");
            }
        }
    }
}

/// A remote operation invocation: operation name plus ordered fields.
#[derive(Debug, Clone)]
pub struct SoapRequest {
    operation: String,
    fields: Vec<Field>,
}

impl SoapRequest {
    pub fn new(operation: impl Into<String>) -> Self {
        Self { operation: operation.into(), fields: Vec::new() }
    }

    /// Append a text parameter.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::text(name, value));
        self
    }

    /// Append a nested element parameter.
    pub fn element(mut self, name: impl Into<String>, children: Vec<Field>) -> Self {
        self.fields.push(Field::element(name, children));
        self
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// `SOAPAction` header value for this operation.
    pub fn soap_action(&self) -> String {
        format!("\"{}/{}\"", VENDOR_NAMESPACE, self.operation)
    }

    /// Render the complete SOAP 1.1 envelope, compact and without newlines.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        out.push_str(
            r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
        );
        out.push_str("<soap:Body>");
        let _ = write!(out, r#"<{} xmlns="{}">"#, self.operation, VENDOR_NAMESPACE);
        for field in &self.fields {
            field.render(&mut out);
        }
        let _ = write!(out, "</{}>", self.operation);
        out.push_str("</soap:Body></soap:Envelope>");
        out
    }
}

/// Escape a text value for inclusion in element content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
