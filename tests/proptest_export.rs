//! Property-based tests for CSV export.
//!
//! Uses proptest to generate arbitrary records and verify that the written
//! file reads back with the same names, in the same order.

use disease_scraper::{DiseaseRecord, FaqEntry, Section, TableRow, TabularWriter};
use proptest::prelude::*;

/// Strategy for generating disease records with awkward text
fn arb_record() -> impl Strategy<Value = DiseaseRecord> {
    (
        "[A-Za-z][A-Za-z ,\"'-]{0,20}",
        prop::collection::vec(".{0,40}", Section::COUNT),
        prop::collection::vec(("[^\r]{0,20}", "[^\r]{0,20}"), 0..3),
        prop::collection::vec("https?://[a-z]{1,10}\\.example/[a-z]{0,8}", 0..3),
    )
        .prop_map(|(name, texts, faqs, references)| {
            let record = Section::ALL
                .iter()
                .zip(texts)
                .fold(DiseaseRecord::new(name), |r, (section, text)| {
                    r.with_section(*section, text)
                });
            record
                .with_faqs(faqs.into_iter().map(|(q, a)| FaqEntry::new(q, a)).collect())
                .with_references(references)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_names_survive_round_trip(records in prop::collection::vec(arb_record(), 1..8)) {
        let mut out = Vec::new();
        let written = TabularWriter::write_to(&mut out, &records).unwrap();
        prop_assert_eq!(written, records.len());

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        prop_assert_eq!(header, records[0].keys());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            prop_assert_eq!(&row[0], record.name());
            prop_assert_eq!(row.len(), DiseaseRecord::columns().len());
        }
    }

    #[test]
    fn prop_every_record_has_the_same_keys(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(a.keys(), b.keys());
        prop_assert_eq!(a.values().unwrap().len(), a.keys().len());
    }
}
