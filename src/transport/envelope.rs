/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! SOAP 1.1 document/literal envelopes
//!
//! Requests are written from a JSON map: nested maps become nested elements,
//! arrays become repeated elements and nulls are left out. Responses are read
//! back into a JSON map where leaves are strings and repeated siblings are
//! arrays.

use crate::constants::SOAP_ENVELOPE_NS;
use crate::error::{AppError, SoapFault};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

const ENVELOPE_PREFIX: &str = "SOAP-ENV";
const SERVICE_PREFIX: &str = "ns1";

fn xml_error(e: impl std::fmt::Display) -> AppError {
    AppError::Xml(e.to_string())
}

/// Name of the body element for an operation: `doLoginEnc` → `DoLoginEncRequest`
#[must_use]
pub fn request_element(method: &str) -> String {
    let mut chars = method.chars();
    match chars.next() {
        Some(first) => format!("{}{}Request", first.to_uppercase(), chars.as_str()),
        None => "Request".to_string(),
    }
}

/// Writes the request envelope of `method`
pub fn build_request(
    namespace: &str,
    method: &str,
    params: &Map<String, Value>,
) -> Result<String, AppError> {
    let mut writer = Writer::new(Vec::new());
    let envelope = format!("{ENVELOPE_PREFIX}:Envelope");
    let body = format!("{ENVELOPE_PREFIX}:Body");
    let operation = format!("{SERVICE_PREFIX}:{}", request_element(method));
    let envelope_xmlns = format!("xmlns:{ENVELOPE_PREFIX}");
    let service_xmlns = format!("xmlns:{SERVICE_PREFIX}");

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new(envelope.as_str()).with_attributes([
            (envelope_xmlns.as_str(), SOAP_ENVELOPE_NS),
            (service_xmlns.as_str(), namespace),
        ])))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new(body.as_str())))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new(operation.as_str())))
        .map_err(xml_error)?;
    for (name, value) in params {
        write_value(&mut writer, name, value)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(operation.as_str())))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(body.as_str())))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(envelope.as_str())))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), AppError> {
    let tag = format!("{SERVICE_PREFIX}:{name}");
    match value {
        Value::Null => return Ok(()),
        Value::Array(values) => {
            for item in values {
                write_value(writer, name, item)?;
            }
            return Ok(());
        }
        Value::Object(children) => {
            writer
                .write_event(Event::Start(BytesStart::new(tag.as_str())))
                .map_err(xml_error)?;
            for (child, child_value) in children {
                write_value(writer, child, child_value)?;
            }
        }
        Value::String(text) => write_text(writer, &tag, text)?,
        Value::Number(n) => write_text(writer, &tag, &n.to_string())?,
        Value::Bool(b) => write_text(writer, &tag, if *b { "true" } else { "false" })?,
    }
    writer
        .write_event(Event::End(BytesEnd::new(tag.as_str())))
        .map_err(xml_error)
}

fn write_text(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<(), AppError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)
}

struct Frame {
    name: String,
    nil: bool,
    text: String,
    children: Map<String, Value>,
}

impl Frame {
    fn new(name: String, nil: bool) -> Self {
        Self {
            name,
            nil,
            text: String::new(),
            children: Map::new(),
        }
    }

    fn into_value(self) -> (String, Value) {
        let value = if self.nil {
            Value::Null
        } else if !self.children.is_empty() {
            Value::Object(self.children)
        } else {
            Value::String(self.text)
        };
        (self.name, value)
    }
}

fn attach(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn is_nil(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .any(|attr| attr.key.local_name().as_ref() == b"nil" && attr.value.as_ref() == b"true")
}

/// Decodes a whole XML document into nested JSON maps keyed by local names
///
/// Leaf text is kept as sent; whitespace between child elements is dropped.
fn decode_document(xml: &str) -> Result<Map<String, Value>, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Frame::new(String::new(), false)];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Frame::new(local_name(&e), is_nil(&e))),
            Ok(Event::Empty(e)) => {
                let (name, value) = Frame::new(local_name(&e), is_nil(&e)).into_value();
                if let Some(parent) = stack.last_mut() {
                    attach(&mut parent.children, name, value);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(xml_error)?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let bytes = e.into_inner();
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(AppError::Xml("unbalanced closing tag".to_string()));
                }
                if let Some(frame) = stack.pop() {
                    let (name, value) = frame.into_value();
                    if let Some(parent) = stack.last_mut() {
                        attach(&mut parent.children, name, value);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Xml(format!(
                    "error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(AppError::Xml("unexpected end of document".to_string()));
    }
    Ok(stack.pop().map(|root| root.children).unwrap_or_default())
}

fn text_of(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Reads a response envelope
///
/// Returns the content of the first body element, or the fault it carries.
pub fn parse_response(xml: &str) -> Result<Map<String, Value>, AppError> {
    let mut document = decode_document(xml)?;

    let body = match document.remove("Envelope") {
        Some(Value::Object(mut envelope)) => match envelope.remove("Body") {
            Some(Value::Object(body)) => body,
            Some(_) => return Ok(Map::new()),
            None => return Err(AppError::Xml("missing SOAP body".to_string())),
        },
        _ => return Err(AppError::Xml("missing SOAP envelope".to_string())),
    };

    if let Some(fault) = body.get("Fault") {
        let fault = match fault {
            Value::Object(fields) => {
                SoapFault::new(text_of(fields, "faultcode"), text_of(fields, "faultstring"))
            }
            _ => SoapFault::new("", ""),
        };
        return Err(AppError::Fault(fault));
    }

    match body.into_iter().next() {
        Some((_, Value::Object(content))) => Ok(content),
        _ => Ok(Map::new()),
    }
}
