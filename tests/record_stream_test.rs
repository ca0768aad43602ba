//! End-to-end tests for the record source: multi-file iteration,
//! assignment arguments, header consumption, FASTX synthesis, and
//! transparent decompression.

use biorec::catalog::{Binder, FormatId};
use biorec::io::{RecordBuffer, RecordSource};
use biorec::{BiorecError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Default)]
struct Symbols {
    columns: Vec<(String, usize)>,
    values: Vec<(String, String)>,
}

impl Binder for Symbols {
    fn bind_column(&mut self, name: &str, index: usize) {
        self.columns.push((name.to_string(), index));
    }
    fn bind_value(&mut self, name: &str, value: &str) {
        self.values.push((name.to_string(), value.to_string()));
    }
}

fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(content).expect("write temp file");
    f
}

fn temp_gz_file(content: &[u8]) -> NamedTempFile {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(content).expect("compress");
    temp_file(&enc.finish().expect("finish gzip"))
}

fn collect_records(source: &mut RecordSource) -> Result<Vec<String>> {
    let mut buf = RecordBuffer::new();
    let mut records = Vec::new();
    while source.next_record(&mut buf, None)? {
        records.push(buf.as_text().into_owned());
    }
    Ok(records)
}

#[test]
fn test_single_fastq_record_synthesis() {
    let f = temp_file(b"@r1\nACGT\n+\n!!!!\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Fastx);
    let mut buf = RecordBuffer::new();

    assert!(source.next_record(&mut buf, None).unwrap());
    assert_eq!(buf.as_bytes(), b"r1\tACGT\t!!!!\t");
    assert_eq!(source.records_in_file(), 1);
    assert_eq!(source.records_total(), 1);

    // The single record has been consumed
    assert!(!source.next_record(&mut buf, None).unwrap());
    // Buffer keeps its previous content after exhaustion
    assert_eq!(buf.as_bytes(), b"r1\tACGT\t!!!!\t");
}

#[test]
fn test_fasta_records_have_empty_quality() {
    let f = temp_file(b">s1 first\nACGT\nACGT\n>s2\nGGGG\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Fastx);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["s1\tACGTACGT\t\tfirst", "s2\tGGGG\t\t"]);
}

#[test]
fn test_tabular_lines_delivered_verbatim() {
    let f = temp_file(b"chr1\t10\t20\nchr2\t30\t40\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Bed);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["chr1\t10\t20", "chr2\t30\t40"]);
    assert_eq!(source.records_total(), 2);
}

#[test]
fn test_multi_file_iteration_resets_file_counter() {
    let f1 = temp_file(b"a\nb\nc\n");
    let f2 = temp_file(b"d\ne\n");
    let args = vec![
        f1.path().to_str().unwrap().to_string(),
        f2.path().to_str().unwrap().to_string(),
    ];
    let mut source = RecordSource::new(args, FormatId::Bed);
    let mut buf = RecordBuffer::new();

    let mut per_file = Vec::new();
    while source.next_record(&mut buf, None).unwrap() {
        per_file.push(source.records_in_file());
    }
    assert_eq!(per_file, vec![1, 2, 3, 1, 2]);
    assert_eq!(source.records_total(), 5);
}

#[test]
fn test_assignment_and_empty_arguments_skipped() {
    let f = temp_file(b"chr1\t1\t2\n");
    let args = vec![
        "sample=NA12878".to_string(),
        String::new(), // deleted argument
        f.path().to_str().unwrap().to_string(),
        "stage=post".to_string(),
    ];
    let mut source = RecordSource::new(args, FormatId::Bed);
    let mut symbols = Symbols::default();
    let mut buf = RecordBuffer::new();

    let mut records = Vec::new();
    while source
        .next_record(&mut buf, Some(&mut symbols))
        .unwrap()
    {
        records.push(buf.as_text().into_owned());
    }

    assert_eq!(records, vec!["chr1\t1\t2"]);
    assert_eq!(
        symbols.values,
        vec![
            ("sample".to_string(), "NA12878".to_string()),
            ("stage".to_string(), "post".to_string()),
        ]
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let args = vec!["/no/such/path.bed".to_string()];
    let mut source = RecordSource::new(args, FormatId::Bed);
    let mut buf = RecordBuffer::new();

    let err = source.next_record(&mut buf, None).unwrap_err();
    assert!(matches!(err, BiorecError::OpenInput { .. }));
}

#[test]
fn test_vcf_header_lines_consumed() {
    let f = temp_file(b"##fileformat=VCFv4.2\n#CHROM\tPOS\nchr1\t100\t.\tA\tT\t50\tPASS\t.\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Vcf);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["chr1\t100\t.\tA\tT\t50\tPASS\t."]);
    assert_eq!(source.records_total(), 1);
}

#[test]
fn test_header_echo_retains_lines() {
    let f = temp_file(b"@HD\tVN:1.6\n@SQ\tSN:chr1\nread1\t0\tchr1\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Sam).with_header_echo();

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["read1\t0\tchr1"]);
    assert_eq!(
        source.take_header_lines(),
        vec!["@HD\tVN:1.6".to_string(), "@SQ\tSN:chr1".to_string()]
    );
    // Drained: a second take is empty
    assert!(source.take_header_lines().is_empty());
}

#[test]
fn test_mid_stream_sentinel_line_is_data() {
    // Only leading sentinel lines are header; later ones are records
    let f = temp_file(b"#h1\nchr1\t1\n#not-a-header\nchr2\t2\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Gff);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["chr1\t1", "#not-a-header", "chr2\t2"]);
}

#[test]
fn test_gzip_input_matches_plain_input() {
    let content = b"@r1\nACGTACGT\n+\nIIIIIIII\n@r2\nTTTT\n+\n####\n";
    let plain = temp_file(content);
    let gz = temp_gz_file(content);

    let mut plain_source = RecordSource::new(
        vec![plain.path().to_str().unwrap().to_string()],
        FormatId::Fastx,
    );
    let mut gz_source = RecordSource::new(
        vec![gz.path().to_str().unwrap().to_string()],
        FormatId::Fastx,
    );

    let plain_records = collect_records(&mut plain_source).unwrap();
    let gz_records = collect_records(&mut gz_source).unwrap();
    assert_eq!(plain_records, gz_records);
    assert_eq!(plain_records.len(), 2);
}

#[test]
fn test_mixed_plain_and_gzip_files() {
    let f1 = temp_file(b"one\n");
    let f2 = temp_gz_file(b"two\n");
    let args = vec![
        f1.path().to_str().unwrap().to_string(),
        f2.path().to_str().unwrap().to_string(),
    ];
    let mut source = RecordSource::new(args, FormatId::Bed);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["one", "two"]);
}

#[test]
fn test_crlf_lines_stripped() {
    let f = temp_file(b"chr1\t1\r\nchr2\t2\r\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Bed);

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["chr1\t1", "chr2\t2"]);
}

#[test]
fn test_custom_record_terminator() {
    let f = temp_file(b"one;two;three");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Header).with_record_terminator(b';');

    let records = collect_records(&mut source).unwrap();
    assert_eq!(records, vec!["one", "two", "three"]);
}

#[test]
fn test_buffer_capacity_never_shrinks() {
    let long = "x".repeat(4096);
    let f = temp_file(format!("{}\nshort\n", long).as_bytes());
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Bed);
    let mut buf = RecordBuffer::new();

    assert!(source.next_record(&mut buf, None).unwrap());
    let cap_after_long = buf.capacity();
    assert!(cap_after_long > 4096);

    assert!(source.next_record(&mut buf, None).unwrap());
    assert_eq!(buf.as_bytes(), b"short");
    assert!(buf.capacity() >= cap_after_long);
}

#[test]
fn test_truncated_fastq_propagates_error() {
    let f = temp_file(b"@r1\nACGT\n+\n!!\n");
    let args = vec![f.path().to_str().unwrap().to_string()];
    let mut source = RecordSource::new(args, FormatId::Fastx);
    let mut buf = RecordBuffer::new();

    let err = source.next_record(&mut buf, None).unwrap_err();
    assert!(matches!(err, BiorecError::InvalidFastx { .. }));
}
