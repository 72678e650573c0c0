//! Record level transformations. Every function leaves its input untouched and
//! returns a new list with the order of retained records preserved.

use crate::coverage::CoverageExtractor;
use crate::dna;
use crate::ds::SequenceRecord;
use crate::error::Result;

pub const CONCATENATED_ID: &str = "concatenated_contig";
pub const CONCATENATED_DESCRIPTION: &str = "Concatenated contig";

/// Output of the name-targeted operations. `matched` counts the records the
/// operation acted on; zero is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub records: Vec<SequenceRecord>,
    pub matched: usize,
}

impl Selection {
    pub fn found(&self) -> bool {
        self.matched > 0
    }
}

pub fn filter_by_min_length(records: &[SequenceRecord], min_len: usize) -> Vec<SequenceRecord> {
    records
        .iter()
        .filter(|record| record.len() >= min_len)
        .cloned()
        .collect()
}

/// Stops at the first id whose coverage cannot be parsed.
pub fn filter_by_min_coverage<E>(
    records: &[SequenceRecord],
    min_cov: f64,
    extractor: &E,
) -> Result<Vec<SequenceRecord>>
where
    E: CoverageExtractor + ?Sized,
{
    let mut kept = vec![];
    for record in records {
        let coverage = extractor.extract(&record.id)?;
        if coverage >= min_cov {
            kept.push(record.clone());
        } else {
            tracing::debug!("drop {}, coverage {} < {}", record.id, coverage, min_cov);
        }
    }
    Ok(kept)
}

pub fn remove_by_name(records: &[SequenceRecord], name: &str) -> Selection {
    let kept = records
        .iter()
        .filter(|record| record.id != name)
        .cloned()
        .collect::<Vec<_>>();
    let matched = records.len() - kept.len();
    Selection {
        records: kept,
        matched,
    }
}

/// Reverse complement every record, or only the ones named `name`.
pub fn reverse_complement(records: &[SequenceRecord], name: Option<&str>) -> Selection {
    let mut matched = 0;
    let records = records
        .iter()
        .map(|record| match name {
            Some(name) if record.id != name => record.clone(),
            _ => {
                matched += 1;
                record.with_seq(dna::reverse_complement(&record.seq))
            }
        })
        .collect::<Vec<_>>();
    Selection { records, matched }
}

/// Always yields exactly one record, even for empty input.
pub fn concatenate(records: &[SequenceRecord]) -> Vec<SequenceRecord> {
    let total = records.iter().map(|record| record.len()).sum::<usize>();
    let mut seq = Vec::with_capacity(total);
    for record in records {
        seq.extend_from_slice(&record.seq);
    }
    tracing::debug!("concatenated {} records into {} bp", records.len(), total);

    vec![SequenceRecord::new(
        CONCATENATED_ID.to_string(),
        CONCATENATED_DESCRIPTION.to_string(),
        seq,
    )]
}

pub fn to_uppercase(records: &[SequenceRecord]) -> Vec<SequenceRecord> {
    records
        .iter()
        .map(|record| record.with_seq(record.seq.to_ascii_uppercase()))
        .collect()
}

pub fn to_lowercase(records: &[SequenceRecord]) -> Vec<SequenceRecord> {
    records
        .iter()
        .map(|record| record.with_seq(record.seq.to_ascii_lowercase()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coverage::{LastTokenCoverage, MarkerCoverage};
    use crate::error::SarafError;
    use crate::fasta::read_fasta_str;

    fn contigs() -> Vec<SequenceRecord> {
        read_fasta_str(
            ">NODE_1_length_8_cov_12.5\nACGTACGT\n>NODE_2_length_3_cov_2.0\nggN\n>NODE_3_length_0_cov_9\n>NODE_4_length_5_cov_8.0 circular\nAAAAC\n",
        )
        .unwrap()
    }

    fn ids(records: &[SequenceRecord]) -> Vec<&str> {
        records.iter().map(|record| record.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_min_length() {
        let records = contigs();
        assert_eq!(filter_by_min_length(&records, 0), records);
        assert_eq!(
            ids(&filter_by_min_length(&records, 5)),
            vec!["NODE_1_length_8_cov_12.5", "NODE_4_length_5_cov_8.0"]
        );
        assert!(filter_by_min_length(&records, 9).is_empty());
    }

    #[test]
    fn test_filter_by_min_coverage() {
        let records = read_fasta_str(">a_cov_10\nACGT\n>b_cov_5\nGGTT\n").unwrap();
        let kept = filter_by_min_coverage(&records, 8.0, &LastTokenCoverage).unwrap();
        assert_eq!(ids(&kept), vec!["a_cov_10"]);

        let kept = filter_by_min_coverage(&contigs(), 8.0, &LastTokenCoverage).unwrap();
        assert_eq!(
            ids(&kept),
            vec![
                "NODE_1_length_8_cov_12.5",
                "NODE_3_length_0_cov_9",
                "NODE_4_length_5_cov_8.0"
            ]
        );
    }

    #[test]
    fn test_filter_by_min_coverage_aborts() {
        let records = read_fasta_str(">a_cov_10\nACGT\n>b_cov_x\nGG\n>c_cov_1\nA\n").unwrap();
        let err = filter_by_min_coverage(&records, 1.0, &LastTokenCoverage).unwrap_err();
        assert!(matches!(err, SarafError::CoverageFormat { ref id, .. } if id == "b_cov_x"));
    }

    #[test]
    fn test_filter_by_min_coverage_rejects_nan() {
        let records = read_fasta_str(">a_cov_10\nACGT\n>ctg_NaN\nGG\n").unwrap();
        let err = filter_by_min_coverage(&records, 1.0, &LastTokenCoverage).unwrap_err();
        assert!(matches!(err, SarafError::CoverageFormat { ref token, .. } if token == "NaN"));
    }

    #[test]
    fn test_filter_by_min_coverage_marker() {
        let records = read_fasta_str(">n_cov_4.0_pilon\nAC\n>m_cov_1.0_pilon\nGG\n").unwrap();
        let extractor: &dyn crate::coverage::CoverageExtractor = &MarkerCoverage::default();
        let kept = filter_by_min_coverage(&records, 2.0, extractor).unwrap();
        assert_eq!(ids(&kept), vec!["n_cov_4.0_pilon"]);
    }

    #[test]
    fn test_remove_by_name() {
        let records = contigs();
        let res = remove_by_name(&records, "NODE_2_length_3_cov_2.0");
        assert!(res.found());
        assert_eq!(res.matched, 1);
        assert_eq!(res.records.len(), 3);
        assert_eq!(res.records[0], records[0]);
        assert_eq!(res.records[1], records[2]);

        let res = remove_by_name(&records, "nonexistent");
        assert!(!res.found());
        assert_eq!(res.records, records);

        // prefix of a real id is not a match
        assert!(!remove_by_name(&records, "NODE_2").found());
    }

    #[test]
    fn test_reverse_complement_all() {
        let records = read_fasta_str(">x\nacgtN\n").unwrap();
        let res = reverse_complement(&records, None);
        assert_eq!(res.records[0].seq, b"Nacgt");
        assert_eq!(res.records[0].id, "x");
        assert_eq!(res.matched, 1);

        let records = contigs();
        let twice = reverse_complement(&reverse_complement(&records, None).records, None);
        assert_eq!(twice.records, records);
    }

    #[test]
    fn test_reverse_complement_named() {
        let records = contigs();
        let res = reverse_complement(&records, Some("NODE_4_length_5_cov_8.0"));
        assert!(res.found());
        assert_eq!(res.records[3].seq, b"GTTTT");
        assert_eq!(res.records[3].description, "NODE_4_length_5_cov_8.0 circular");
        assert_eq!(&res.records[..3], &records[..3]);

        let res = reverse_complement(&records, Some("nonexistent"));
        assert!(!res.found());
        assert_eq!(res.records, records);
    }

    #[test]
    fn test_concatenate() {
        let records = contigs();
        let res = concatenate(&records);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, CONCATENATED_ID);
        assert_eq!(res[0].description, CONCATENATED_DESCRIPTION);
        assert_eq!(res[0].seq, b"ACGTACGTggNAAAAC");
        assert_eq!(
            res[0].len(),
            records.iter().map(|record| record.len()).sum::<usize>()
        );

        let res = concatenate(&[]);
        assert_eq!(res.len(), 1);
        assert!(res[0].is_empty());
    }

    #[test]
    fn test_case_conversion() {
        let records = contigs();
        let upper = to_uppercase(&records);
        let lower = to_lowercase(&records);
        assert_eq!(upper[1].seq, b"GGN");
        assert_eq!(lower[0].seq, b"acgtacgt");
        for ((orig, up), low) in records.iter().zip(upper.iter()).zip(lower.iter()) {
            assert_eq!(orig.len(), up.len());
            assert_eq!(orig.len(), low.len());
            assert_eq!(orig.description, up.description);
            assert_eq!(orig.id, low.id);
        }
    }
}
