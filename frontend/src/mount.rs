use thiserror::Error;
use web_sys::Element;

/// Why the application could not be attached to the host document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount target `#{0}` not found in document")]
    AnchorMissing(String),
}

/// Look up the element the app renders into.
pub fn find_anchor(id: &str) -> Result<Element, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::AnchorMissing(id.to_string()))
}

/// Hand the anchor to `render` exactly once, or log why there is none.
///
/// Returns whether the app was mounted. A missing anchor is reported and
/// otherwise left alone: no retry, no fallback markup.
pub fn attach<A>(anchor: Result<A, MountError>, render: impl FnOnce(A)) -> bool {
    match anchor {
        Ok(anchor) => {
            render(anchor);
            true
        },
        Err(e) => {
            tracing::error!(error = %e, "PedalSwap frontend not mounted");
            false
        },
    }
}
