use bio::alphabets::{self, Alphabet};

/// Watson-Crick and IUPAC ambiguity complements, case preserved.
/// Symbols without a complement (gaps, stops, anything unknown) map to themselves.
pub static COMPLEMENT_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }

    let from = b"ACGTRYKMSWBDHVN";
    let to = b"TGCAYRMKSWVHDBN";
    let mut i = 0;
    while i < from.len() {
        table[from[i] as usize] = to[i];
        table[from[i].to_ascii_lowercase() as usize] = to[i].to_ascii_lowercase();
        i += 1;
    }

    table
};

pub fn complement(base: u8) -> u8 {
    COMPLEMENT_TABLE[base as usize]
}

/// b"ACGTAA" -> b"TTACGT"
pub fn reverse_complement(dna: &[u8]) -> Vec<u8> {
    dna.iter().rev().map(|&base| complement(base)).collect()
}

/// IUPAC nucleotide codes in both cases, plus gap and stop symbols
pub fn nucleotide_alphabet() -> Alphabet {
    let mut symbols = alphabets::dna::iupac_alphabet().symbols;
    symbols.insert(b'-' as usize);
    symbols.insert(b'*' as usize);
    Alphabet { symbols }
}

/// position and symbol of the first byte outside `alphabet`
pub fn first_invalid_symbol(dna: &[u8], alphabet: &Alphabet) -> Option<(usize, u8)> {
    dna.iter()
        .position(|&base| !alphabet.symbols.contains(base as usize))
        .map(|pos| (pos, dna[pos]))
}

#[cfg(test)]
mod test {
    use super::{first_invalid_symbol, nucleotide_alphabet, reverse_complement};

    #[test]
    fn test_reverse_complement() {
        let dna_sequence = "ATCGTAGC";
        let res = reverse_complement(dna_sequence.as_bytes());
        assert_eq!(res, b"GCTACGAT");
    }

    #[test]
    fn test_reverse_complement_soft_masked() {
        assert_eq!(reverse_complement(b"acgtN"), b"Nacgt");
        assert_eq!(reverse_complement(b"AAccGG"), b"CCggTT");
    }

    #[test]
    fn test_reverse_complement_ambiguity_codes() {
        assert_eq!(reverse_complement(b"RYKMSWBDHVN"), b"NBDHVWSKMRY");
        assert_eq!(reverse_complement(b"ry-*"), b"*-ry");
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        let seq = b"ACGTRYKMSWBDHVNacgtrykmswbdhvn-*XU".to_vec();
        assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }

    #[test]
    fn test_matches_bio_revcomp() {
        let seq = b"ACGTNacgtnRYSWKMBDHVrySwkmbdhv";
        assert_eq!(reverse_complement(seq), bio::alphabets::dna::revcomp(seq));
    }

    #[test]
    fn test_first_invalid_symbol() {
        let alphabet = nucleotide_alphabet();
        assert_eq!(first_invalid_symbol(b"ACGTNacgtn-*", &alphabet), None);
        assert_eq!(first_invalid_symbol(b"ACG!T", &alphabet), Some((3, b'!')));
        assert_eq!(first_invalid_symbol(b"7ACG", &alphabet), Some((0, b'7')));
    }
}
