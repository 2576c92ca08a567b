//! Endpoint groups, one per Brevo resource

pub mod account;
pub mod contacts;
pub mod email;
pub mod folders;
pub mod lists;
pub mod sms;

use crate::transport::Transport;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Sort order requested from every paginated collection
pub(crate) const SORT_PARAM: (&str, &str) = ("sort", "asc");

/// Everything except RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encode a value for use as one URL path segment
pub(crate) fn path_segment(value: &str) -> String {
  utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
