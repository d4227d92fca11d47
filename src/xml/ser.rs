use crate::format::fmt_string;
use crate::{Error, Map, Options, Result, Value};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

pub(crate) fn encode(data: Option<&Map>, options: &Options) -> Result<String> {
    let mut buf = Vec::new();
    encode_to_writer(data, options, &mut buf)?;
    Ok(String::from_utf8(buf).map_err(|e| e.utf8_error())?)
}

/// Writes the document under its configured root element. An absent or
/// empty document writes nothing.
pub(crate) fn encode_to_writer<W: Write>(
    data: Option<&Map>,
    options: &Options,
    writer: W,
) -> Result<()> {
    let Some(map) = data.filter(|map| !map.is_empty()) else {
        return Ok(());
    };
    // Checked up front so an invalid name never leaves a partial document.
    check_name(&options.xml_name)?;
    for (name, _) in &options.xml_attributes {
        check_name(name)?;
    }
    check_names(map)?;

    let mut root = BytesStart::new(options.xml_name.as_str());
    if let Some(namespace) = &options.xml_namespace {
        root.push_attribute(("xmlns", namespace.as_str()));
    }
    for (name, value) in &options.xml_attributes {
        root.push_attribute((name.as_str(), value.as_str()));
    }

    let mut writer = Writer::new(writer);
    writer.write_event(Event::Start(root))?;
    write_children(&mut writer, map, &options.xml_array_separator)?;
    writer.write_event(Event::End(BytesEnd::new(options.xml_name.as_str())))?;
    Ok(())
}

fn write_children<W: Write>(writer: &mut Writer<W>, map: &Map, separator: &str) -> Result<()> {
    for (name, value) in map {
        writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
        match value {
            Value::Object(children) => write_children(writer, children, separator)?,
            leaf => {
                let text = fmt_string(leaf, separator);
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    }
    Ok(())
}

fn check_names(map: &Map) -> Result<()> {
    for (name, value) in map {
        check_name(name)?;
        if let Value::Object(children) = value {
            check_names(children)?;
        }
    }
    Ok(())
}

/// Accepts the XML 1.0 `Name` production. Colons are allowed so that
/// prefixed keys such as `hyp:number` are written as they are.
fn check_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidXmlName(name.to_string()))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}
