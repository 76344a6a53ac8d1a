use crate::system::{LinkId, PartId};

/// The kind of identifier involved in an [`Error::IndexOutOfRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdKind {
    /// A [`PartId`].
    Part,
    /// A [`LinkId`].
    Link,
}

impl std::fmt::Display for IdKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Part => f.write_str("part"),
            Self::Link => f.write_str("link"),
        }
    }
}

/// Errors raised by a [`System`](crate::System).
///
/// Every error is raised synchronously by the call that detected it. Retrying the same call
/// without changing its input reproduces the same error.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A link was created with an endpoint that does not exist.
    #[error("link endpoint {part} does not reference one of the {part_count} existing parts")]
    InvalidReference {
        /// The offending endpoint.
        part: PartId,
        /// Number of parts in the system when the link was created.
        part_count: usize,
    },

    /// A link was created with both endpoints on the same part.
    #[error("cannot link part {part} to itself")]
    SelfLink {
        /// The part given as both endpoints.
        part: PartId,
    },

    /// A part or a link was accessed with an identifier past the end of its collection.
    #[error("{kind} {index} is out of range for a system holding {len} {kind}s")]
    IndexOutOfRange {
        /// Whether a part or a link was accessed.
        kind: IdKind,
        /// The requested identifier.
        index: u32,
        /// Length of the accessed collection.
        len: usize,
    },

    /// The endpoints of a link occupy the same position.
    #[error("link {link} has coincident endpoints {i} and {j}")]
    DegenerateGeometry {
        /// The degenerate link.
        link: LinkId,
        /// First endpoint of the link.
        i: PartId,
        /// Second endpoint of the link.
        j: PartId,
    },

    /// No identifier is left to name a new link.
    #[error("the system cannot hold more than {} links", LinkId::MAX)]
    LinkCapacityExceeded,
}

/// Alias of [`std::result::Result`] using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
