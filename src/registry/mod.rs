// ~/winelocale/src/registry/mod.rs
// The registry patch core: pure computation from settings to a REGEDIT4
// text document. All file and process I/O lives in `wine.rs`.

pub mod fontsize;
pub mod locale;
pub mod logfont;
pub mod patch;
pub mod templates;
