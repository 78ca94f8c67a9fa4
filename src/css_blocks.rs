// Literal blocks from the TB4 editor view's <style> section.
// Whitespace is significant: 4-space rule indent, 8-space declarations, no trailing newline.

/// Mobile-only signup rules as shipped in the editor view.
pub const SEARCH: &str = r#"    .tb4-canvas[data-device="mobile"] .tb4-signup-preview {
        flex-direction: column;
        gap: 8px;
    }
    .tb4-canvas[data-device="mobile"] .tb4-signup-preview input,
    .tb4-canvas[data-device="mobile"] .tb4-signup-preview button {
        width: 100% !important;
        flex: none !important;
    }"#;

/// Same rules with the tablet selectors added, matching the search module section.
pub const REPLACEMENT: &str = r#"    .tb4-canvas[data-device="tablet"] .tb4-signup-preview,
    .tb4-canvas[data-device="mobile"] .tb4-signup-preview {
        flex-direction: column;
        gap: 8px;
    }
    .tb4-canvas[data-device="tablet"] .tb4-signup-preview input,
    .tb4-canvas[data-device="tablet"] .tb4-signup-preview button,
    .tb4-canvas[data-device="mobile"] .tb4-signup-preview input,
    .tb4-canvas[data-device="mobile"] .tb4-signup-preview button {
        width: 100% !important;
        flex: none !important;
    }"#;
