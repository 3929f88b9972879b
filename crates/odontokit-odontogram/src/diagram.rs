//! Diagram parsing.
//!
//! Turns a view's vector markup into the pieces the editor needs: the
//! `viewBox`, the paintable regions (every `<path>` with path data, numbered in
//! document order) and the raw `<defs>` markup, which is carried through to the
//! rendered output untouched.

use odontokit_core::DiagramError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::model::RegionId;
use crate::viewport::ViewBox;

/// A paintable region of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub d: String,
}

/// A parsed diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub view_box: ViewBox,
    pub regions: Vec<Region>,
    pub defs: Option<String>,
}

impl Diagram {
    /// Parses SVG markup.
    pub fn parse(source: &str) -> Result<Self, DiagramError> {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(true);

        let mut view_box = None;
        let mut seen_root = false;
        let mut regions = Vec::new();
        let mut defs: Option<String> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| malformed(reader.buffer_position(), e))?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_start = matches!(event, Event::Start(_));
                    let local = e.local_name();
                    let name = local.as_ref();

                    if !seen_root {
                        if name != b"svg" {
                            return Err(DiagramError::MissingRoot);
                        }
                        seen_root = true;
                        view_box = Some(root_view_box(e, reader.buffer_position())?);
                        continue;
                    }

                    match name {
                        b"defs" if is_start => {
                            let span = reader
                                .read_to_end(e.name())
                                .map_err(|err| malformed(reader.buffer_position(), err))?;
                            let inner = source
                                .get(span.start as usize..span.end as usize)
                                .unwrap_or_default()
                                .trim();
                            if !inner.is_empty() {
                                let merged = match defs.take() {
                                    Some(existing) => format!("{}{}", existing, inner),
                                    None => inner.to_string(),
                                };
                                defs = Some(merged);
                            }
                        }
                        b"path" => {
                            if let Some(d) = attribute(e, b"d", reader.buffer_position())? {
                                if !d.trim().is_empty() {
                                    regions.push(Region {
                                        id: RegionId::new(regions.len()),
                                        d,
                                    });
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let view_box = view_box.ok_or(DiagramError::MissingRoot)?;
        tracing::debug!(
            "Parsed diagram: viewBox {}, {} regions",
            view_box,
            regions.len()
        );

        Ok(Self {
            view_box,
            regions,
            defs,
        })
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }
}

fn malformed(position: u64, err: impl std::fmt::Display) -> DiagramError {
    DiagramError::Malformed {
        position,
        reason: err.to_string(),
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8], position: u64) -> Result<Option<String>, DiagramError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| malformed(position, err))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| malformed(position, err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Reads `viewBox`, falling back to `width`/`height`, then to a 100x100 box.
fn root_view_box(e: &BytesStart<'_>, position: u64) -> Result<ViewBox, DiagramError> {
    if let Some(raw) = attribute(e, b"viewBox", position)? {
        return parse_view_box(&raw);
    }

    let width = attribute(e, b"width", position)?.and_then(|v| leading_number(&v));
    let height = attribute(e, b"height", position)?.and_then(|v| leading_number(&v));
    match (width, height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Ok(ViewBox::new(0.0, 0.0, w, h)),
        _ => Ok(ViewBox::default()),
    }
}

fn parse_view_box(raw: &str) -> Result<ViewBox, DiagramError> {
    let invalid = || DiagramError::InvalidViewBox {
        value: raw.to_string(),
    };
    let numbers: Vec<f64> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;

    match numbers.as_slice() {
        [min_x, min_y, width, height] => {
            let view_box = ViewBox::new(*min_x, *min_y, *width, *height);
            if view_box.is_valid() && min_x.is_finite() && min_y.is_finite() {
                Ok(view_box)
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}

/// `"200px"` -> 200.0
fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
