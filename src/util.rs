/// Source diagnostics.
///
/// This module turns the byte offsets carried by errors back into line and
/// column numbers and renders a caret under the offending token, for display
/// to users alongside the original source text.
pub mod diagnostic;
