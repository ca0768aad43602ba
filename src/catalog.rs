//! Format catalog: named tabular formats and column-name binding.
//!
//! The catalog is static knowledge: each built-in format carries an ordered
//! list of field names, an optional header sentinel byte, and a flag saying
//! whether the field delimiter must be forced to a single tab. Resolution and
//! binding are the only operations; the catalog never owns symbol storage,
//! it hands name/index pairs to a caller-supplied [`Binder`].
//!
//! # Built-in formats
//!
//! | name | fields | header sentinel |
//! |------|--------|-----------------|
//! | `header` | derived from first input line | none |
//! | `bed` | chrom..blockstarts (12) | none |
//! | `sam` | qname..qual (11) | `@` |
//! | `vcf` | chrom..info (8) | `#` |
//! | `gff` / `gtf` | seqname..group (10) | `#` |
//! | `fastx` | name, seq, qual, comment | none |
//!
//! # Examples
//!
//! ```
//! use biorec::catalog::{bind_columns, resolve_format, Binder, FormatId};
//!
//! struct Collect(Vec<(String, usize)>);
//! impl Binder for Collect {
//!     fn bind_column(&mut self, name: &str, index: usize) {
//!         self.0.push((name.to_string(), index));
//!     }
//!     fn bind_value(&mut self, _name: &str, _value: &str) {}
//! }
//!
//! let id = resolve_format("bed").unwrap();
//! assert_eq!(id, FormatId::Bed);
//!
//! let mut cols = Collect(Vec::new());
//! bind_columns(id, &mut cols);
//! assert_eq!(cols.0[0], ("chrom".to_string(), 1));
//! assert_eq!(cols.0[11], ("blockstarts".to_string(), 12));
//! ```

use std::fmt::Write as _;

/// Identifier for a built-in record format.
///
/// Replaces ad hoc name comparisons with enum dispatch: the field list,
/// header sentinel, and delimiter policy hang off the variant as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    /// Field names derived from the first input line
    Header,
    /// Browser Extensible Data (genomic intervals)
    Bed,
    /// Sequence Alignment/Map
    Sam,
    /// Variant Call Format
    Vcf,
    /// General Feature Format (also selected by the name `gtf`)
    Gff,
    /// FASTA/FASTQ, delivered as a synthesized tab-joined record
    Fastx,
}

/// Static description of a named format.
#[derive(Debug)]
pub struct FormatSpec {
    /// Canonical format name
    pub name: &'static str,
    /// Ordered field names, 1-based column order
    pub fields: &'static [&'static str],
    /// Leading lines starting with this byte are header, not data
    pub header_sentinel: Option<u8>,
    /// Force input and output field separators to a single tab
    pub force_tab_delimiter: bool,
}

static HEADER_SPEC: FormatSpec = FormatSpec {
    name: "header",
    fields: &[],
    header_sentinel: None,
    force_tab_delimiter: false,
};

static BED_SPEC: FormatSpec = FormatSpec {
    name: "bed",
    fields: &[
        "chrom",
        "start",
        "end",
        "name",
        "score",
        "strand",
        "thickstart",
        "thickend",
        "rgb",
        "blockcount",
        "blocksizes",
        "blockstarts",
    ],
    header_sentinel: None,
    force_tab_delimiter: true,
};

static SAM_SPEC: FormatSpec = FormatSpec {
    name: "sam",
    fields: &[
        "qname", "flag", "rname", "pos", "mapq", "cigar", "rnext", "pnext", "tlen", "seq", "qual",
    ],
    header_sentinel: Some(b'@'),
    force_tab_delimiter: true,
};

// One historical snapshot of this table fused "filter" and "info" into a
// single token (a missing separator between adjacent literals). The corrected
// 8-field list is authoritative.
static VCF_SPEC: FormatSpec = FormatSpec {
    name: "vcf",
    fields: &["chrom", "pos", "id", "ref", "alt", "qual", "filter", "info"],
    header_sentinel: Some(b'#'),
    force_tab_delimiter: true,
};

// The last-field convention varies across GFF/GTF snapshots. Here
// "attribute" binds to column 9 (matching GFF3's real column count) and the
// legacy GTF name "group" to column 10.
static GFF_SPEC: FormatSpec = FormatSpec {
    name: "gff",
    fields: &[
        "seqname",
        "source",
        "feature",
        "start",
        "end",
        "score",
        "strand",
        "frame",
        "attribute",
        "group",
    ],
    header_sentinel: Some(b'#'),
    force_tab_delimiter: true,
};

static FASTX_SPEC: FormatSpec = FormatSpec {
    name: "fastx",
    fields: &["name", "seq", "qual", "comment"],
    header_sentinel: None,
    force_tab_delimiter: true,
};

impl FormatId {
    /// All built-in formats, in catalog-listing order.
    pub const ALL: [FormatId; 6] = [
        FormatId::Header,
        FormatId::Bed,
        FormatId::Sam,
        FormatId::Vcf,
        FormatId::Gff,
        FormatId::Fastx,
    ];

    /// Static spec for this format.
    pub fn spec(self) -> &'static FormatSpec {
        match self {
            FormatId::Header => &HEADER_SPEC,
            FormatId::Bed => &BED_SPEC,
            FormatId::Sam => &SAM_SPEC,
            FormatId::Vcf => &VCF_SPEC,
            FormatId::Gff => &GFF_SPEC,
            FormatId::Fastx => &FASTX_SPEC,
        }
    }

    /// Whether records of this format are multi-line sequence blocks rather
    /// than delimiter-bounded lines.
    pub fn is_sequence(self) -> bool {
        self == FormatId::Fastx
    }
}

/// Caller-supplied binding capability.
///
/// The host's symbol table stays on the host side; the catalog and record
/// source only produce name/value pairs through this trait.
pub trait Binder {
    /// Associate a field name with a 1-based column index.
    fn bind_column(&mut self, name: &str, index: usize);

    /// Assign a string value to a name (from `name=value` arguments).
    fn bind_value(&mut self, name: &str, value: &str);
}

/// Resolve a format name to its identifier.
///
/// Exact match only; `gtf` is an alias for [`FormatId::Gff`]. Returns `None`
/// for unknown names; the host should show [`catalog_listing`] in that case,
/// which is informational, not an error.
pub fn resolve_format(name: &str) -> Option<FormatId> {
    match name {
        "header" => Some(FormatId::Header),
        "bed" => Some(FormatId::Bed),
        "sam" => Some(FormatId::Sam),
        "vcf" => Some(FormatId::Vcf),
        "gff" | "gtf" => Some(FormatId::Gff),
        "fastx" => Some(FormatId::Fastx),
        _ => None,
    }
}

/// Render the catalog of known formats and their field lists.
///
/// Format: `name:` on one line, then a tab-indented run of
/// `index:fieldname` pairs. Returned as a string so the host decides where
/// the listing goes.
pub fn catalog_listing() -> String {
    let mut out = String::new();
    for id in FormatId::ALL {
        let spec = id.spec();
        let _ = writeln!(out, "{}:", spec.name);
        if spec.fields.is_empty() {
            out.push_str("\t(derived from the first input line)\n");
            continue;
        }
        out.push('\t');
        for (i, field) in spec.fields.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}:{}", i + 1, field);
        }
        out.push('\n');
    }
    out
}

/// Rewrite a field name into a valid host identifier.
///
/// Punctuation other than underscore becomes `_`; a leading digit gets an
/// underscore prefix. Names that are already clean pass through unchanged.
///
/// # Examples
///
/// ```
/// use biorec::catalog::sanitize_name;
///
/// assert_eq!(sanitize_name("chrom"), "chrom");
/// assert_eq!(sanitize_name("read-len"), "read_len");
/// assert_eq!(sanitize_name("2nd-col"), "_2nd_col");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            out.push('_');
        }
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

/// True when a name is a pure (unsigned) integer string.
///
/// Such names are never bound: binding them would shadow positional column
/// references in the host.
fn is_integer_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Bind every declared field of a static format to its 1-based column.
///
/// Calls `binder.bind_column(name, index)` in declared order, skipping
/// pure-integer names. For [`FormatId::Header`] nothing is bound here; use
/// [`bind_header_line`] with the first logical input line instead.
pub fn bind_columns(id: FormatId, binder: &mut dyn Binder) {
    for (i, field) in id.spec().fields.iter().enumerate() {
        if is_integer_name(field) {
            continue;
        }
        binder.bind_column(&sanitize_name(field), i + 1);
    }
}

/// Bind column names read off a header line.
///
/// The line is split on runs of whitespace (leading/trailing whitespace
/// trimmed, multi-space runs collapse to one delimiter); each non-empty,
/// non-purely-numeric token binds to its 1-based position.
pub fn bind_header_line(line: &str, binder: &mut dyn Binder) {
    for (i, token) in line.split_whitespace().enumerate() {
        if is_integer_name(token) {
            continue;
        }
        binder.bind_column(&sanitize_name(token), i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect {
        columns: Vec<(String, usize)>,
        values: Vec<(String, String)>,
    }

    impl Binder for Collect {
        fn bind_column(&mut self, name: &str, index: usize) {
            self.columns.push((name.to_string(), index));
        }
        fn bind_value(&mut self, name: &str, value: &str) {
            self.values.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(resolve_format("header"), Some(FormatId::Header));
        assert_eq!(resolve_format("bed"), Some(FormatId::Bed));
        assert_eq!(resolve_format("sam"), Some(FormatId::Sam));
        assert_eq!(resolve_format("vcf"), Some(FormatId::Vcf));
        assert_eq!(resolve_format("gff"), Some(FormatId::Gff));
        assert_eq!(resolve_format("gtf"), Some(FormatId::Gff));
        assert_eq!(resolve_format("fastx"), Some(FormatId::Fastx));
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert_eq!(resolve_format("bogus"), None);
        assert_eq!(resolve_format("BED"), None); // exact match only
        assert_eq!(resolve_format(""), None);
    }

    #[test]
    fn test_bed_binding_order() {
        let mut c = Collect::default();
        bind_columns(FormatId::Bed, &mut c);
        assert_eq!(c.columns.len(), 12);
        assert_eq!(c.columns[0], ("chrom".to_string(), 1));
        assert_eq!(c.columns[1], ("start".to_string(), 2));
        assert_eq!(c.columns[11], ("blockstarts".to_string(), 12));
    }

    #[test]
    fn test_vcf_has_separate_filter_and_info() {
        let spec = FormatId::Vcf.spec();
        assert_eq!(spec.fields.len(), 8);
        assert_eq!(spec.fields[6], "filter");
        assert_eq!(spec.fields[7], "info");
    }

    #[test]
    fn test_gff_last_field_convention() {
        let mut c = Collect::default();
        bind_columns(FormatId::Gff, &mut c);
        assert!(c.columns.contains(&("attribute".to_string(), 9)));
        assert!(c.columns.contains(&("group".to_string(), 10)));
    }

    #[test]
    fn test_header_sentinels() {
        assert_eq!(FormatId::Sam.spec().header_sentinel, Some(b'@'));
        assert_eq!(FormatId::Vcf.spec().header_sentinel, Some(b'#'));
        assert_eq!(FormatId::Gff.spec().header_sentinel, Some(b'#'));
        assert_eq!(FormatId::Bed.spec().header_sentinel, None);
        assert_eq!(FormatId::Fastx.spec().header_sentinel, None);
    }

    #[test]
    fn test_tab_forcing() {
        assert!(!FormatId::Header.spec().force_tab_delimiter);
        for id in [
            FormatId::Bed,
            FormatId::Sam,
            FormatId::Vcf,
            FormatId::Gff,
            FormatId::Fastx,
        ] {
            assert!(id.spec().force_tab_delimiter, "{:?}", id);
        }
    }

    #[test]
    fn test_catalog_listing_contains_all_formats() {
        let listing = catalog_listing();
        for name in ["header", "bed", "sam", "vcf", "gff", "fastx"] {
            assert!(listing.contains(&format!("{}:", name)), "{}", name);
        }
        assert!(listing.contains("1:chrom"));
        assert!(listing.contains("12:blockstarts"));
        assert!(listing.contains("11:qual"));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("chrom"), "chrom");
        assert_eq!(sanitize_name("thick.start"), "thick_start");
        assert_eq!(sanitize_name("read-len"), "read_len");
        assert_eq!(sanitize_name("2nd"), "_2nd");
        assert_eq!(sanitize_name("a_b"), "a_b");
    }

    #[test]
    fn test_header_line_binding() {
        let mut c = Collect::default();
        bind_header_line("  chrom \t start\tend   gene.id ", &mut c);
        assert_eq!(
            c.columns,
            vec![
                ("chrom".to_string(), 1),
                ("start".to_string(), 2),
                ("end".to_string(), 3),
                ("gene_id".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_header_line_skips_numeric_tokens() {
        let mut c = Collect::default();
        bind_header_line("chrom 42 end", &mut c);
        // "42" keeps its position but is never bound
        assert_eq!(
            c.columns,
            vec![("chrom".to_string(), 1), ("end".to_string(), 3)]
        );
    }

    #[test]
    fn test_header_line_empty() {
        let mut c = Collect::default();
        bind_header_line("   ", &mut c);
        assert!(c.columns.is_empty());
    }
}
