//! Annotated full text
//!
//! Single-pass quick-xml scan over ALTO markup. Word content is emitted as
//! plain text; runs referencing a named-entity tag are replaced by entity
//! markup, rendered once per tag id.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{HashMap, HashSet};

use crate::error::{AltoError, Result};

/// Entity category, selects the icon of a linked entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Location,
    Institution,
    Other,
}

impl EntityKind {
    pub fn from_type(tag_type: &str) -> Self {
        match tag_type.to_lowercase().as_str() {
            "person" => Self::Person,
            "location" => Self::Location,
            "institution" => Self::Institution,
            _ => Self::Other,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Person => "glyphicon glyphicon-user",
            Self::Location => "glyphicon glyphicon-map-marker",
            Self::Institution => "glyphicon glyphicon-home",
            Self::Other => "glyphicon glyphicon-tag",
        }
    }
}

/// Named-entity tag definition (`NamedEntityTag`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntityTag {
    pub id: String,
    pub tag_type: Option<String>,
    pub label: Option<String>,
    pub uri: Option<String>,
}

/// Extract full text with named-entity markup from ALTO markup
///
/// Malformed markup surfaces as [`AltoError::Xml`] or
/// [`AltoError::Attribute`]; callers treating missing text as non-fatal
/// should go through [`crate::AltoEngine::annotated_text`].
pub fn extract_annotated_text(alto: &str) -> Result<String> {
    if alto.trim().is_empty() {
        return Err(AltoError::EmptyInput);
    }

    let mut reader = Reader::from_str(alto);
    let mut state = AnnotationState::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => state.on_element(&e)?,
            Event::Empty(e) => {
                state.on_element(&e)?;
                if e.local_name().as_ref() == b"TextLine" {
                    state.on_line_end();
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"TextLine" {
                    state.on_line_end();
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(state.finish())
}

/// Call-scoped accumulator threaded through the scan
#[derive(Default)]
struct AnnotationState {
    types: HashMap<String, String>,
    labels: HashMap<String, String>,
    uris: HashMap<String, String>,
    rendered: HashSet<String>,
    out: String,
}

impl AnnotationState {
    fn on_element(&mut self, e: &BytesStart) -> Result<()> {
        match e.local_name().as_ref() {
            b"NamedEntityTag" => {
                if let Some(tag) = read_tag(e)? {
                    self.define(tag);
                }
            }
            b"String" => {
                let content = attribute(e, b"CONTENT")?.unwrap_or_default();
                let tag_refs = attribute(e, b"TAGREFS")?;
                self.on_string(&content, tag_refs.as_deref());
            }
            _ => {}
        }
        Ok(())
    }

    fn define(&mut self, tag: NamedEntityTag) {
        if let Some(tag_type) = tag.tag_type {
            self.types.insert(tag.id.clone(), tag_type);
        }
        if let Some(label) = tag.label {
            self.labels.insert(tag.id.clone(), label);
        }
        if let Some(uri) = tag.uri {
            self.uris.insert(tag.id, uri);
        }
    }

    fn on_string(&mut self, content: &str, tag_refs: Option<&str>) {
        let tag_id = tag_refs.and_then(|refs| {
            refs.split_whitespace()
                .find(|id| self.types.contains_key(*id))
                .map(str::to_string)
        });

        let Some(tag_id) = tag_id else {
            self.out.push_str(&html_escape::encode_text(content));
            self.out.push(' ');
            return;
        };

        // Later runs of an already rendered entity collapse into the first
        if !self.rendered.insert(tag_id.clone()) {
            return;
        }

        let tag_type = self.types[&tag_id].to_lowercase();
        let label = self
            .labels
            .get(&tag_id)
            .map(String::as_str)
            .unwrap_or(content);

        self.out.push_str(&format!(
            "<span class=\"ner-{}\">",
            html_escape::encode_double_quoted_attribute(&tag_type)
        ));

        match self.uris.get(&tag_id) {
            Some(uri) => {
                let icon = EntityKind::from_type(&tag_type).icon_class();
                self.out.push_str(&format!(
                    "<span class=\"ner-trigger\" title=\"{}\" tabindex=\"-1\" data-remotecontent=\"{}\" data-type=\"{}\">\
                     <span class=\"ner-popover-pointer\"></span><span class=\"{}\"></span>{}</span>",
                    html_escape::encode_double_quoted_attribute(label),
                    html_escape::encode_double_quoted_attribute(uri),
                    html_escape::encode_double_quoted_attribute(&tag_type),
                    icon,
                    html_escape::encode_text(label),
                ));
            }
            None => self.out.push_str(&html_escape::encode_text(label)),
        }

        self.out.push_str("</span> ");
    }

    /// Runs on `</TextLine>` (or `<TextLine/>`), so a line's break follows
    /// its words and the final trimmed separator is the last newline
    fn on_line_end(&mut self) {
        self.out.push_str("<br>\n");
    }

    fn finish(mut self) -> String {
        self.out.pop();
        self.out
    }
}

fn read_tag(e: &BytesStart) -> Result<Option<NamedEntityTag>> {
    let Some(id) = attribute(e, b"ID")? else {
        tracing::warn!("NamedEntityTag without ID ignored");
        return Ok(None);
    };

    Ok(Some(NamedEntityTag {
        id,
        tag_type: attribute(e, b"TYPE")?,
        label: attribute(e, b"LABEL")?,
        uri: attribute(e, b"URI")?,
    }))
}

fn attribute(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
