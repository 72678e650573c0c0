//! common data structures

/// One FASTA record. `description` is the whole header line after '>'
/// and normally starts with `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub description: String,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: String, description: String, seq: Vec<u8>) -> Self {
        Self {
            id: id,
            description: description,
            seq: seq,
        }
    }

    /// build a record from a header line without the leading '>'
    pub fn from_header(header: &str) -> Self {
        let mut res = Self::default();
        res.id = header_to_id(header).to_string();
        res.description = header.to_string();
        res
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// same id and description, new sequence
    pub fn with_seq(&self, seq: Vec<u8>) -> Self {
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            seq: seq,
        }
    }
}

/// "NODE_1_length_50 some text" -> "NODE_1_length_50"
pub fn header_to_id(header: &str) -> &str {
    header.split(char::is_whitespace).next().unwrap_or("")
}
