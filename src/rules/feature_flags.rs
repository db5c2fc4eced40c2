//! Orphaned feature-flag blocks
//!
//! Once a feature flag is retired, controllers are left with bare blocks that
//! still carry the flag comment:
//!
//! ```text
//! // Check feature flag
//! {
//!     return await CreateRedirectResponse(req, "legacy");
//! }
//! ```
//!
//! and the "not implemented" flavour, which logs and returns an error
//! response before falling through to the real handler:
//!
//! ```text
//! // Check feature flag for new content API
//! {
//!     _logger.LogInformation("...");
//!     var errorResponse = req.CreateResponse(HttpStatusCode.NotImplemented);
//!     return errorResponse;
//! }
//! ```
//!
//! Both rules swallow the whitespace around the block and leave one newline.

use super::RewriteRule;
use lazy_static::lazy_static;
use std::borrow::Cow;

/// Comment tail is confined to its own line; the helper's argument list runs
/// up to the first `;`.
const REDIRECT_BLOCK_PATTERN: &str = concat!(
    r"\s*//\s*Check feature flag[^\n]*\n",
    r"\s*\{\s*\n",
    r"\s*return await CreateRedirectResponse\([^;]+;\s*\n",
    r"\s*\}\s*",
);

/// Body is arbitrary and may span lines; the block ends at the first
/// `return ...;` whose next line is the closing brace.
const NOT_IMPLEMENTED_BLOCK_PATTERN: &str = concat!(
    r"(?s)\s*//\s*Check feature flag for new[^\n]*\n",
    r"\s*\{\s*\n",
    r".*?return [^;]+;\s*\n",
    r"\s*\}\s*",
);

lazy_static! {
    /// Rule A
    pub static ref REDIRECT_BLOCK: RewriteRule =
        RewriteRule::new("redirect-block", REDIRECT_BLOCK_PATTERN, "\n")
            .expect("redirect block pattern compiles");

    /// Rule B
    pub static ref NOT_IMPLEMENTED_BLOCK: RewriteRule =
        RewriteRule::new("not-implemented-block", NOT_IMPLEMENTED_BLOCK_PATTERN, "\n")
            .expect("not-implemented block pattern compiles");
}

/// Remove flag blocks whose only statement returns `CreateRedirectResponse(...)`
pub fn remove_redirect_blocks(text: &str) -> Cow<'_, str> {
    REDIRECT_BLOCK.apply(text)
}

/// Remove "for new ..." flag blocks that end in a `return`
pub fn remove_not_implemented_blocks(text: &str) -> Cow<'_, str> {
    NOT_IMPLEMENTED_BLOCK.apply(text)
}
