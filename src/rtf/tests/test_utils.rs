//! Builders for synthetic Word clipboard RTF

/// A PNG picture group the way Word writes it, hex wrapped at 16 digits
pub fn png_group(hex: &str) -> String {
    format!(
        "{{\\*\\shppict{{\\pict{{\\*\\picprop\\shplid1025}}\\picscalex100\\picscaley100\\piccropl0\\picw2117\\pich2117\\picwgoal1200\\pichgoal1200\\pngblip\\bliptag-1723823042{{\\*\\blipuid 99412c3e5b9ca3f5d0c96f0bd0e76d4e}}\r\n{}}}}}",
        wrap(hex, 16)
    )
}

/// A JPEG picture group with a `\blipupi` and no blip uid
pub fn jpeg_group(hex: &str) -> String {
    format!(
        "{{\\pict\\picw100\\pich80\\jpegblip\\bliptag255\\blipupi96\r\n{}}}",
        wrap(hex, 16)
    )
}

/// A metafile picture group, which Word emits as the fallback rendering
pub fn wmf_group(hex: &str) -> String {
    format!(
        "{{\\nonshppict{{\\pict\\picscalex100\\wmetafile8\\picw2117\\pich2117\\bliptag-1723823042\r\n{}}}}}",
        wrap(hex, 16)
    )
}

/// Wrap a document body in a minimal RTF envelope
pub fn document(body: &str) -> String {
    format!(
        "{{\\rtf1\\ansi\\ansicpg1252\\deff0{{\\fonttbl{{\\f0 Calibri;}}}}\\pard\\plain Before {} after\\par}}",
        body
    )
}

fn wrap(hex: &str, width: usize) -> String {
    hex.as_bytes()
        .chunks(width)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\r\n")
}
