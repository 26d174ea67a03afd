//! XML document reader for configuration files.
//!
//! Collects the text of each direct child of the root element. Nested
//! elements below the children are ignored.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::{ConfigError, ConfigFields};

/// Read the top-level fields of an XML configuration document.
pub fn read_fields(content: &str) -> Result<ConfigFields, ConfigError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut fields = ConfigFields::new();
    let mut depth = 0usize;
    let mut root_closed = false;
    let mut current: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ConfigError::malformed(format!("{} (at byte {})", e, reader.error_position()))
        })?;

        match event {
            Event::Start(start) => {
                if depth == 0 && root_closed {
                    return Err(ConfigError::malformed("multiple root elements"));
                }
                depth += 1;
                if depth == 2 {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    if fields.contains(&name) {
                        current = None;
                    } else {
                        fields.insert_first(name.clone(), "");
                        current = Some(name);
                    }
                }
            }
            Event::Empty(empty) => match depth {
                0 if root_closed => return Err(ConfigError::malformed("multiple root elements")),
                0 => root_closed = true,
                1 => {
                    let name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                    fields.insert_first(name, "");
                }
                _ => {}
            },
            Event::End(_) => {
                if depth == 2 {
                    current = None;
                }
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(text) => {
                if depth == 0 {
                    return Err(ConfigError::malformed("text outside the root element"));
                }
                if depth == 2 {
                    if let Some(name) = current.as_deref() {
                        let text = text.unescape().map_err(|e| {
                            ConfigError::malformed(format!("invalid text in '{}': {}", name, e))
                        })?;
                        fields.append_text(name, &text);
                    }
                }
            }
            Event::CData(data) => {
                if depth == 2 {
                    if let Some(name) = current.as_deref() {
                        let bytes = data.into_inner();
                        fields.append_text(name, &String::from_utf8_lossy(&bytes));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ConfigError::malformed("unexpected end of document, unclosed element"));
    }
    if !root_closed {
        return Err(ConfigError::malformed("document has no root element"));
    }

    Ok(fields)
}
