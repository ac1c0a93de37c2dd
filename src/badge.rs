//! Badge classification and rendering.
//!
//! A ratio is truncated (never rounded) to one decimal of percent, mapped
//! to one of six fixed colors, and substituted into a fixed 104x20 SVG
//! template together with its label.

/// Badge palette, ordered from healthy green to critical red. Buckets span
/// 100% down in 10-point bands; 50% and below all clamp into the last
/// bucket.
pub const PALETTE: [&str; 6] = ["#4c1", "#97ca00", "#a4a61d", "#dfb317", "#fe7d37", "#e05d44"];

/// `textLength` tiers for the value text, chosen by display string length
/// (1-2, 3, or 4+ characters) to keep the text visually centered in the
/// value segment.
const TEXT_LENGTHS: [&str; 3] = ["170", "250", "330"];

/// Truncate a ratio to tenths of a percent. Truncation rather than
/// rounding: a value just under a threshold (e.g. 69.999%) must never
/// display as passing (70%).
fn truncate_tenths(ratio: f64) -> u64 {
    (ratio * 1000.0) as u64
}

/// Map a ratio in [0.0, 1.0] to its display string and badge color.
pub fn classify(ratio: f64) -> (String, &'static str) {
    let tenths = truncate_tenths(ratio);

    let bucket = (1000u64.saturating_sub(tenths) + 99) / 100;
    let bucket = bucket.min(PALETTE.len() as u64 - 1) as usize;

    let display = if tenths % 10 == 0 {
        format!("{}%", tenths / 10)
    } else {
        format!("{}.{}%", tenths / 10, tenths % 10)
    };

    (display, PALETTE[bucket])
}

fn text_length(display: &str) -> &'static str {
    match display.len() {
        0..=2 => TEXT_LENGTHS[0],
        3 => TEXT_LENGTHS[1],
        _ => TEXT_LENGTHS[2],
    }
}

/// Render the badge SVG for a classified value. The template is fixed at
/// 104x20 units: a 61-unit label segment and a 43-unit value segment
/// filled with the bucket color.
pub fn render(display: &str, color: &str, label: &str) -> String {
    let text_length = text_length(display);
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="104" height="20" role="img" aria-label="{label}: {display}">"##,
            r##"<linearGradient id="s" x2="0" y2="100%">"##,
            r##"<stop offset="0" stop-color="#bbb" stop-opacity=".1"/>"##,
            r##"<stop offset="1" stop-opacity=".1"/></linearGradient>"##,
            r##"<clipPath id="r"><rect width="104" height="20" rx="3" fill="#fff"/></clipPath>"##,
            r##"<g clip-path="url(#r)"><rect width="61" height="20" fill="#555"/>"##,
            r##"<rect x="61" width="43" height="20" fill="{color}"/>"##,
            r##"<rect width="104" height="20" fill="url(#s)"/></g>"##,
            r##"<g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" text-rendering="geometricPrecision" font-size="110">"##,
            r##"<text aria-hidden="true" x="315" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="510">{label}</text>"##,
            r##"<text x="315" y="140" transform="scale(.1)" fill="#fff" textLength="510">{label}</text>"##,
            r##"<text aria-hidden="true" x="815" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="{text_length}">{display}</text>"##,
            r##"<text x="815" y="140" transform="scale(.1)" fill="#fff" textLength="{text_length}">{display}</text>"##,
            r##"</g></svg>"##,
        ),
        label = label,
        display = display,
        color = color,
        text_length = text_length,
    )
}
