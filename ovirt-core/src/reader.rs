//! Pull reader over an oVirt XML document.
//!
//! [`XmlReader`] wraps a quick-xml reader and exposes the handful of
//! primitives every generated type reader is built from: locating a start
//! element, iterating the children of the element currently open, reading
//! character data as typed scalars, and skipping subtrees that the schema
//! does not describe.

use crate::config::ReaderConfig;
use crate::error::{ReadError, Result};
use crate::list::Link;
use crate::value::{XmlScalar, XmlValue};
use chrono::{DateTime, FixedOffset};
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};

/// Streaming XML reader used by all generated readers.
pub struct XmlReader<'a> {
    inner: Reader<&'a [u8]>,
    config: ReaderConfig,
    open: Vec<String>,
}

impl<'a> XmlReader<'a> {
    /// Creates a reader with default settings.
    #[must_use]
    pub fn new(xml: &'a str) -> Self {
        Self::with_config(xml, ReaderConfig::default())
    }

    /// Creates a reader with the given settings.
    #[must_use]
    pub fn with_config(xml: &'a str, config: ReaderConfig) -> Self {
        let mut inner = Reader::from_str(xml);
        // `<comment/>` must look exactly like `<comment></comment>`.
        inner.config_mut().expand_empty_elements = true;
        Self {
            inner,
            config,
            open: Vec::new(),
        }
    }

    /// Returns the reader settings.
    #[must_use]
    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns the number of elements currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        let event = self.inner.read_event()?;
        match &event {
            Event::Start(start) => {
                if self.open.len() >= self.config.max_depth {
                    return Err(ReadError::DepthExceeded {
                        limit: self.config.max_depth,
                    });
                }
                self.open.push(element_name(start)?.to_string());
            }
            Event::End(_) => {
                self.open.pop();
            }
            Event::Eof => {
                if let Some(element) = self.open.last() {
                    return Err(ReadError::unexpected_eof(element.clone()));
                }
            }
            _ => {}
        }
        Ok(event)
    }

    /// Finds the next start element, wherever it is.
    ///
    /// Returns `None` when the end of the document is reached first.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed.
    pub fn find_start(&mut self) -> Result<Option<BytesStart<'a>>> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok(Some(start)),
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Returns the next child of the element currently open.
    ///
    /// Returns `None` once the end tag of that element has been consumed.
    /// Every child returned must be consumed completely (read or skipped)
    /// before this is called again.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or ends early.
    pub fn next_child(&mut self) -> Result<Option<BytesStart<'a>>> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok(Some(start)),
                Event::End(_) | Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Consumes the element just opened and everything below it.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or ends early.
    pub fn skip(&mut self, _start: &BytesStart<'_>) -> Result<()> {
        let mut nesting = 0usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => nesting += 1,
                Event::End(_) => {
                    if nesting == 0 {
                        return Ok(());
                    }
                    nesting -= 1;
                }
                Event::Eof => return Ok(()),
                _ => {}
            }
        }
    }

    /// Skips a child element that the parent type does not describe.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or ends early.
    pub fn skip_unknown(&mut self, start: &BytesStart<'_>, parent: &str) -> Result<()> {
        tracing::trace!(
            element = element_name(start)?,
            parent,
            "skipping unrecognized element"
        );
        self.skip(start)
    }

    /// Reads the character data of the element just opened.
    ///
    /// Text, CDATA sections and entity references are concatenated as-is;
    /// nested elements are skipped.
    ///
    /// An unknown entity reference is reported only after the end tag has
    /// been consumed, so the reader stays positioned for the next sibling.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or contains an
    /// unknown entity reference.
    pub fn read_text(&mut self, start: &BytesStart<'_>) -> Result<String> {
        let mut text = String::new();
        let mut bad_reference = None;
        loop {
            match self.next_event()? {
                Event::Text(t) => text.push_str(std::str::from_utf8(t.as_ref())?),
                Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
                Event::GeneralRef(r) => {
                    let name = std::str::from_utf8(&r)?;
                    if let Err(err) = resolve_reference(&mut text, name, element_name(start)?) {
                        bad_reference.get_or_insert(err);
                    }
                }
                Event::Start(child) => self.skip(&child)?,
                Event::End(_) => {
                    return match bad_reference {
                        Some(err) => Err(err),
                        None => Ok(text),
                    };
                }
                Event::Eof => return Err(ReadError::unexpected_eof(element_name(start)?)),
                _ => {}
            }
        }
    }

    /// Reads the element just opened as a single scalar.
    ///
    /// # Errors
    /// Returns `ReadError::InvalidValue` if the text does not parse as `T`.
    pub fn read_scalar<T: XmlScalar>(&mut self, start: &BytesStart<'_>) -> Result<T> {
        let text = self.read_text(start)?;
        match T::parse_text(&text) {
            Some(value) => Ok(value),
            None => Err(ReadError::invalid_value(
                element_name(start)?,
                text,
                T::KIND,
            )),
        }
    }

    /// Reads every child of the element just opened as one scalar each.
    ///
    /// The children's tag names are not checked.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or a value does not
    /// parse (unless lenient values are enabled).
    pub fn read_scalars<T: XmlScalar>(&mut self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        while let Some(child) = self.next_child()? {
            let result = self.read_scalar::<T>(&child);
            if let Some(value) = self.recover(result)? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Reads a string element.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed.
    pub fn read_string(&mut self, start: &BytesStart<'_>) -> Result<String> {
        self.read_text(start)
    }

    /// Reads a boolean element.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or the value is not
    /// a boolean.
    pub fn read_bool(&mut self, start: &BytesStart<'_>) -> Result<bool> {
        self.read_scalar(start)
    }

    /// Reads an integer element.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or the value is not
    /// a 64-bit integer.
    pub fn read_i64(&mut self, start: &BytesStart<'_>) -> Result<i64> {
        self.read_scalar(start)
    }

    /// Reads a decimal element.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or the value is not
    /// a number.
    pub fn read_f64(&mut self, start: &BytesStart<'_>) -> Result<f64> {
        self.read_scalar(start)
    }

    /// Reads an RFC 3339 date-time element.
    ///
    /// # Errors
    /// Returns `ReadError` if the document is malformed or the value is not
    /// a date-time.
    pub fn read_time(&mut self, start: &BytesStart<'_>) -> Result<DateTime<FixedOffset>> {
        self.read_scalar(start)
    }

    /// Reads a field value, honouring lenient mode for malformed scalars.
    ///
    /// # Errors
    /// Returns `ReadError` if reading fails and the failure is not a
    /// recoverable malformed value.
    pub fn read_field<T: XmlValue>(&mut self, start: &BytesStart<'_>) -> Result<Option<T>> {
        let result = T::read_value(self, start);
        self.recover(result)
    }

    /// Reads an attribute of a start element as a scalar.
    ///
    /// # Errors
    /// Returns `ReadError` if the attribute is malformed or does not parse
    /// (unless lenient values are enabled).
    pub fn attribute<T: XmlScalar>(&self, start: &BytesStart<'_>, name: &str) -> Result<Option<T>> {
        let Some(raw) = raw_attribute(start, name)? else {
            return Ok(None);
        };
        let result = match T::parse_text(&raw) {
            Some(value) => Ok(value),
            None => Err(ReadError::invalid_value(name, raw, T::KIND)),
        };
        self.recover(result)
    }

    /// Reads a `<link rel=".." href=".."/>` element and consumes it.
    ///
    /// Returns `None` unless both attributes are present and non-empty.
    ///
    /// # Errors
    /// Returns `ReadError` if the element is malformed.
    pub fn read_link(&mut self, start: &BytesStart<'_>) -> Result<Option<Link>> {
        let rel = raw_attribute(start, "rel")?;
        let href = raw_attribute(start, "href")?;
        self.skip(start)?;
        match (rel, href) {
            (Some(rel), Some(href)) if !rel.is_empty() && !href.is_empty() => {
                Ok(Some(Link::new(rel, href)))
            }
            _ => Ok(None),
        }
    }

    fn recover<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(ReadError::InvalidValue {
                element,
                value,
                expected,
            }) if self.config.lenient_values => {
                tracing::warn!(%element, %value, expected, "dropping malformed value");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// Returns the local name of a start element.
///
/// # Errors
/// Returns `ReadError::Utf8` if the name is not valid UTF-8.
pub fn element_name<'b>(start: &'b BytesStart<'_>) -> Result<&'b str> {
    Ok(std::str::from_utf8(start.local_name().into_inner())?)
}

/// Returns the unescaped value of an attribute, matched by local name.
///
/// # Errors
/// Returns `ReadError` if the attribute list or value is malformed.
pub fn raw_attribute(start: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape(value)?.into_owned()));
        }
    }
    Ok(None)
}

fn resolve_reference(text: &mut String, name: &str, element: &str) -> Result<()> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse().ok(),
        };
        match code.and_then(char::from_u32) {
            Some(c) => text.push(c),
            None => {
                return Err(ReadError::invalid_value(
                    element,
                    format!("&{name};"),
                    "character reference",
                ));
            }
        }
    } else {
        match resolve_predefined_entity(name) {
            Some(value) => text.push_str(value),
            None => {
                return Err(ReadError::invalid_value(
                    element,
                    format!("&{name};"),
                    "entity reference",
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XmlReaderBuilder;

    fn open<'a>(reader: &mut XmlReader<'a>) -> BytesStart<'a> {
        reader
            .find_start()
            .expect("Failed to read")
            .expect("No start element")
    }

    #[test]
    fn test_find_start_skips_prolog() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- inventory -->
<vms/>"#;
        let mut reader = XmlReader::new(xml);
        let start = open(&mut reader);
        assert_eq!(element_name(&start).unwrap(), "vms");
        assert_eq!(reader.depth(), 1);
    }

    #[test]
    fn test_find_start_at_end() {
        let mut reader = XmlReader::new("  ");
        assert!(reader.find_start().unwrap().is_none());
    }

    #[test]
    fn test_next_child_iterates_siblings() {
        let xml = "<vm>\n  <name>a</name>\n  <comment/>\n  <memory>1</memory>\n</vm>";
        let mut reader = XmlReader::new(xml);
        open(&mut reader);

        let mut names = Vec::new();
        while let Some(child) = reader.next_child().unwrap() {
            names.push(element_name(&child).unwrap().to_string());
            reader.skip(&child).unwrap();
        }
        assert_eq!(names, ["name", "comment", "memory"]);
        assert_eq!(reader.depth(), 0);
    }

    #[test]
    fn test_read_text_entities_and_cdata() {
        let xml = "<description>a &amp; b &lt;c&gt; &#65;&#x42; <![CDATA[<raw>]]></description>";
        let mut reader = XmlReader::new(xml);
        let start = open(&mut reader);
        let text = reader.read_text(&start).unwrap();
        assert_eq!(text, "a & b <c> AB <raw>");
    }

    #[test]
    fn test_read_text_keeps_whitespace() {
        let mut reader = XmlReader::new("<comment>  spaced  </comment>");
        let start = open(&mut reader);
        assert_eq!(reader.read_string(&start).unwrap(), "  spaced  ");
    }

    #[test]
    fn test_read_text_unknown_entity() {
        let mut reader = XmlReader::new("<name>&nbsp;</name>");
        let start = open(&mut reader);
        let err = reader.read_text(&start).unwrap_err();
        assert!(matches!(err, ReadError::InvalidValue { .. }));
    }

    #[test]
    fn test_read_text_unknown_entity_consumes_element() {
        let mut reader = XmlReader::new("<vm><name>a &bogus; b</name><memory>5</memory></vm>");
        open(&mut reader);
        let name = reader.next_child().unwrap().unwrap();
        assert!(reader.read_text(&name).is_err());
        assert_eq!(reader.depth(), 1);

        let memory = reader.next_child().unwrap().unwrap();
        assert_eq!(element_name(&memory).unwrap(), "memory");
        assert_eq!(reader.read_i64(&memory).unwrap(), 5);
        assert!(reader.next_child().unwrap().is_none());
    }

    #[test]
    fn test_read_scalars_bad_reference_keeps_siblings() {
        let mut reader = XmlReaderBuilder::new()
            .lenient_values(true)
            .build("<ids><id>1</id><id>&bogus;2</id><id>3</id></ids>");
        open(&mut reader);
        let ids: Vec<i64> = reader.read_scalars().unwrap();
        assert_eq!(ids, [1, 3]);
        assert_eq!(reader.depth(), 0);
    }

    #[test]
    fn test_read_text_skips_nested_elements() {
        let mut reader = XmlReader::new("<name>x<b>ignored</b>y</name>");
        let start = open(&mut reader);
        assert_eq!(reader.read_text(&start).unwrap(), "xy");
    }

    #[test]
    fn test_read_empty_element() {
        let mut reader = XmlReader::new("<comment/>");
        let start = open(&mut reader);
        assert_eq!(reader.read_string(&start).unwrap(), "");
        assert_eq!(reader.depth(), 0);
    }

    #[test]
    fn test_read_scalars() {
        let mut reader = XmlReader::new("<r><b> true </b><i>-42</i><f>1.5</f></r>");
        open(&mut reader);

        let b = reader.next_child().unwrap().unwrap();
        assert!(reader.read_bool(&b).unwrap());
        let i = reader.next_child().unwrap().unwrap();
        assert_eq!(reader.read_i64(&i).unwrap(), -42);
        let f = reader.next_child().unwrap().unwrap();
        assert!((reader.read_f64(&f).unwrap() - 1.5).abs() < f64::EPSILON);
        assert!(reader.next_child().unwrap().is_none());
    }

    #[test]
    fn test_read_time() {
        let mut reader = XmlReader::new("<creation_time>2017-02-13T10:42:14.785+01:00</creation_time>");
        let start = open(&mut reader);
        let time = reader.read_time(&start).unwrap();
        assert_eq!(time.offset().local_minus_utc(), 3600);
        assert_eq!(time.timestamp(), 1_486_978_934);
    }

    #[test]
    fn test_invalid_integer() {
        let mut reader = XmlReader::new("<memory>lots</memory>");
        let start = open(&mut reader);
        match reader.read_i64(&start) {
            Err(ReadError::InvalidValue {
                element,
                value,
                expected,
            }) => {
                assert_eq!(element, "memory");
                assert_eq!(value, "lots");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_field_is_dropped() {
        let mut reader = XmlReaderBuilder::new()
            .lenient_values(true)
            .build("<r><memory>lots</memory><cores>2</cores></r>");
        open(&mut reader);

        let memory = reader.next_child().unwrap().unwrap();
        assert_eq!(reader.read_field::<i64>(&memory).unwrap(), None);
        let cores = reader.next_child().unwrap().unwrap();
        assert_eq!(reader.read_field::<i64>(&cores).unwrap(), Some(2));
    }

    #[test]
    fn test_strict_field_fails() {
        let mut reader = XmlReader::new("<r><memory>lots</memory></r>");
        open(&mut reader);
        let memory = reader.next_child().unwrap().unwrap();
        assert!(reader.read_field::<i64>(&memory).is_err());
    }

    #[test]
    fn test_read_scalars_collection() {
        let mut reader = XmlReader::new("<devices><device>hd</device><device>cdrom</device></devices>");
        open(&mut reader);
        let devices: Vec<String> = reader.read_scalars().unwrap();
        assert_eq!(devices, ["hd", "cdrom"]);
    }

    #[test]
    fn test_attributes() {
        let mut reader = XmlReader::new(r#"<vlan id="10" href="/a?x=1&amp;y=2"/>"#);
        let start = open(&mut reader);
        assert_eq!(reader.attribute::<i64>(&start, "id").unwrap(), Some(10));
        assert_eq!(
            reader.attribute::<String>(&start, "href").unwrap().as_deref(),
            Some("/a?x=1&y=2")
        );
        assert_eq!(reader.attribute::<String>(&start, "name").unwrap(), None);
    }

    #[test]
    fn test_read_link() {
        let xml = r#"<vm><link rel="nics" href="/vms/1/nics"/><link rel="" href="/x"/><link href="/y"></link></vm>"#;
        let mut reader = XmlReader::new(xml);
        open(&mut reader);

        let mut links = Vec::new();
        while let Some(child) = reader.next_child().unwrap() {
            if let Some(link) = reader.read_link(&child).unwrap() {
                links.push(link);
            }
        }
        assert_eq!(links, [Link::new("nics", "/vms/1/nics")]);
    }

    #[test]
    fn test_skip_nested_subtree() {
        let xml = "<vm><actions><link rel=\"start\" href=\"/s\"/><link rel=\"stop\" href=\"/t\"/></actions><name>a</name></vm>";
        let mut reader = XmlReader::new(xml);
        open(&mut reader);

        let actions = reader.next_child().unwrap().unwrap();
        reader.skip_unknown(&actions, "vm").unwrap();
        let name = reader.next_child().unwrap().unwrap();
        assert_eq!(reader.read_string(&name).unwrap(), "a");
    }

    #[test]
    fn test_depth_limit() {
        let mut reader = XmlReaderBuilder::new()
            .max_depth(2)
            .build("<a><b><c/></b></a>");
        open(&mut reader);
        let b = reader.next_child().unwrap().unwrap();
        let err = reader.skip(&b).unwrap_err();
        assert!(matches!(err, ReadError::DepthExceeded { limit: 2 }));
    }

    #[test]
    fn test_unexpected_eof() {
        let mut reader = XmlReader::new("<vm><name>a");
        let vm = open(&mut reader);
        assert!(reader.skip(&vm).is_err());
    }
}
