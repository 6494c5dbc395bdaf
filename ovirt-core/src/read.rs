//! The `ReadOne` / `ReadMany` pair implemented by every schema type.

use crate::config::ReaderConfig;
use crate::error::{ReadError, Result};
use crate::list::List;
use crate::reader::{XmlReader, element_name};
use crate::value::XmlValue;
use quick_xml::events::BytesStart;

/// A schema type that can be read from XML.
///
/// Implementations only provide [`XmlRead::read_element`]; the locate,
/// check and collect logic is shared.
pub trait XmlRead: Sized {
    /// Element name of a single object, e.g. `vm`.
    const TAG: &'static str;
    /// Element name of a collection, e.g. `vms`.
    const PLURAL_TAG: &'static str;

    /// Reads the body of an element that has already been opened and
    /// matched. Consumes the element up to and including its end tag.
    ///
    /// # Errors
    /// Returns `ReadError` if the element is malformed.
    fn read_element(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self>;

    /// Reads one object.
    ///
    /// Without `start`, the next start element in the document is used and
    /// `Ok(None)` is returned at the end of the document. The element must
    /// be named `expected_tag`, or [`XmlRead::TAG`] when not given.
    ///
    /// # Errors
    /// Returns `ReadError::TagMismatch` if the element has another name, or
    /// any error raised while reading it.
    fn read_one(
        reader: &mut XmlReader<'_>,
        start: Option<&BytesStart<'_>>,
        expected_tag: Option<&str>,
    ) -> Result<Option<Self>> {
        let found;
        let start = match start {
            Some(start) => start,
            None => match reader.find_start()? {
                Some(next) => {
                    found = next;
                    &found
                }
                None => return Ok(None),
            },
        };
        let expected = expected_tag.unwrap_or(Self::TAG);
        let actual = element_name(start)?;
        if actual != expected {
            return Err(ReadError::tag_mismatch(expected, actual));
        }
        Self::read_element(reader, start).map(Some)
    }

    /// Reads a collection of objects.
    ///
    /// Without `start`, the next start element in the document is used and
    /// `Ok(None)` is returned at the end of the document. The container's
    /// own name is not checked; children not named [`XmlRead::TAG`] are
    /// skipped.
    ///
    /// # Errors
    /// Returns `ReadError` if the collection is malformed.
    fn read_many(
        reader: &mut XmlReader<'_>,
        start: Option<&BytesStart<'_>>,
    ) -> Result<Option<List<Self>>> {
        let found;
        let start = match start {
            Some(start) => start,
            None => match reader.find_start()? {
                Some(next) => {
                    found = next;
                    &found
                }
                None => return Ok(None),
            },
        };
        read_list(reader, start).map(Some)
    }

    /// Reads one object from a complete document.
    ///
    /// # Errors
    /// Returns `ReadError::EmptyDocument` if there is no element, or any
    /// error raised by [`XmlRead::read_one`].
    fn from_xml(xml: &str) -> Result<Self> {
        Self::from_xml_with(xml, ReaderConfig::default())
    }

    /// Reads one object from a complete document with custom settings.
    ///
    /// # Errors
    /// Same as [`XmlRead::from_xml`].
    fn from_xml_with(xml: &str, config: ReaderConfig) -> Result<Self> {
        let mut reader = XmlReader::with_config(xml, config);
        Self::read_one(&mut reader, None, None)?.ok_or(ReadError::EmptyDocument)
    }

    /// Reads a collection from a complete document.
    ///
    /// # Errors
    /// Returns `ReadError::EmptyDocument` if there is no element, or any
    /// error raised by [`XmlRead::read_many`].
    fn list_from_xml(xml: &str) -> Result<List<Self>> {
        Self::list_from_xml_with(xml, ReaderConfig::default())
    }

    /// Reads a collection from a complete document with custom settings.
    ///
    /// # Errors
    /// Same as [`XmlRead::list_from_xml`].
    fn list_from_xml_with(xml: &str, config: ReaderConfig) -> Result<List<Self>> {
        let mut reader = XmlReader::with_config(xml, config);
        Self::read_many(&mut reader, None)?.ok_or(ReadError::EmptyDocument)
    }
}

/// Reads the children of an opened collection element.
///
/// # Errors
/// Returns `ReadError` if the collection is malformed.
pub fn read_list<T: XmlRead>(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<List<T>> {
    let container = element_name(start)?;
    let mut list = List::new();
    while let Some(child) = reader.next_child()? {
        if element_name(&child)? == T::TAG {
            list.push(T::read_element(reader, &child)?);
        } else {
            reader.skip_unknown(&child, container)?;
        }
    }
    Ok(list)
}

impl<T: XmlRead> XmlValue for List<T> {
    fn read_value(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self> {
        read_list(reader, start)
    }
}
