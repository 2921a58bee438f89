//! RTF control words recognized by the picture scanner

/// PNG blip marker
pub const PNG_BLIP: &str = "\\pngblip";
/// JPEG blip marker
pub const JPEG_BLIP: &str = "\\jpegblip";

/// Metafile and bitmap blips that Word also emits but which are not
/// recovered as images
pub mod unsupported_blips {
    pub const EMF: &str = "\\emfblip";
    pub const WMF: &str = "\\wmetafile";
    pub const MAC_PICT: &str = "\\macpict";
    pub const DIB: &str = "\\dibitmap";
    pub const DDB: &str = "\\wbitmap";

    pub const ALL: [(&str, &str); 5] = [
        (EMF, "EMF"),
        (WMF, "WMF"),
        (MAC_PICT, "QuickDraw PICT"),
        (DIB, "DIB"),
        (DDB, "DDB"),
    ];
}
