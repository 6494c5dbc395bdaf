//! Checking API replies for faults and reading their bodies.
//!
//! The transport is left to the caller: whatever HTTP client is used, its
//! reply is wrapped in a [`Response`] and handed to these functions.

use crate::error::{Result, SdkError};
use ovirt_core::{List, ReadError, XmlRead, XmlReader};
use ovirt_types::{Action, Fault};

/// An HTTP reply from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code, e.g. `404`.
    pub code: u16,
    /// Status line text, e.g. `404 Not Found`.
    pub status: String,
    /// Response body.
    pub body: String,
}

impl Response {
    /// Creates a new response.
    pub fn new(code: u16, status: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
            body: body.into(),
        }
    }

    fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// Builds the error for a failed response.
///
/// The message lists the fault reason and detail, when known, followed by
/// the HTTP status.
#[must_use]
pub fn build_error(response: &Response, fault: Option<Fault>) -> SdkError {
    let mut parts = Vec::with_capacity(4);
    if let Some(fault) = &fault {
        if let Some(reason) = fault.reason() {
            parts.push(format!("Fault reason is \"{reason}\"."));
        }
        if let Some(detail) = fault.detail() {
            parts.push(format!("Fault detail is \"{detail}\"."));
        }
    }
    parts.push(format!("HTTP response code is \"{}\".", response.code));
    parts.push(format!("HTTP response message is \"{}\".", response.status));
    SdkError::from_status(response.code, parts.join(" "), fault)
}

/// Reads a fault from `body`; a body holding any other element counts as
/// having no fault.
fn read_fault(body: &str) -> Result<Option<Fault>> {
    let mut reader = XmlReader::new(body);
    match Fault::read_one(&mut reader, None, None) {
        Ok(fault) => Ok(fault),
        Err(err) if err.is_tag_mismatch() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Checks a response that is expected to carry a fault.
///
/// # Errors
/// Returns an error when the body is empty, is not a fault, is a fault, or
/// the status code is 400 or above. Returns `Ok(())` only for a body without
/// any element and a successful status code.
pub fn check_fault(response: &Response) -> Result<()> {
    tracing::debug!(code = response.code, "checking response for fault");
    if !response.has_body() {
        return Err(build_error(response, None));
    }
    let mut reader = XmlReader::new(&response.body);
    let fault = match Fault::read_one(&mut reader, None, None) {
        Ok(fault) => fault,
        Err(err) if err.is_tag_mismatch() => return Err(build_error(response, None)),
        Err(err) => return Err(err.into()),
    };
    if fault.is_some() || response.code >= 400 {
        return Err(build_error(response, fault));
    }
    Ok(())
}

/// Checks the response to an action request.
///
/// # Errors
/// Returns an error when the body is empty, is a fault, or is an action
/// whose result carries a fault.
pub fn check_action(response: &Response) -> Result<Option<Action>> {
    tracing::debug!(code = response.code, "checking action response");
    if !response.has_body() {
        return Err(build_error(response, None));
    }
    if let Some(fault) = read_fault(&response.body)? {
        return Err(build_error(response, Some(fault)));
    }

    let mut reader = XmlReader::new(&response.body);
    let action = match Action::read_one(&mut reader, None, None) {
        Ok(action) => action,
        Err(err) if err.is_tag_mismatch() => None,
        Err(err) => return Err(err.into()),
    };
    match action {
        Some(action) => match action.fault() {
            Some(fault) => Err(build_error(response, Some(fault.clone()))),
            None => Ok(Some(action)),
        },
        None => Ok(None),
    }
}

/// Reads a single object from a response accepted with one of `ok_codes`.
///
/// # Errors
/// Returns the fault error for any other status code, or the read error if
/// the body is malformed.
pub fn read_entity<T: XmlRead>(response: &Response, ok_codes: &[u16]) -> Result<T> {
    if !ok_codes.contains(&response.code) {
        return Err(unexpected_status(response));
    }
    let mut reader = XmlReader::new(&response.body);
    T::read_one(&mut reader, None, None)?.ok_or_else(|| ReadError::EmptyDocument.into())
}

/// Reads a collection from a response accepted with one of `ok_codes`.
///
/// # Errors
/// Returns the fault error for any other status code, or the read error if
/// the body is malformed.
pub fn read_list<T: XmlRead>(response: &Response, ok_codes: &[u16]) -> Result<List<T>> {
    if !ok_codes.contains(&response.code) {
        return Err(unexpected_status(response));
    }
    let mut reader = XmlReader::new(&response.body);
    T::read_many(&mut reader, None)?.ok_or_else(|| ReadError::EmptyDocument.into())
}

fn unexpected_status(response: &Response) -> SdkError {
    tracing::debug!(code = response.code, status = %response.status, "unexpected status code");
    match check_fault(response) {
        Err(err) => err,
        Ok(()) => build_error(response, None),
    }
}
