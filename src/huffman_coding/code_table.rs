use log::{error, info, warn};
use rustc_hash::FxHashMap;

use super::alphabet::Alphabet;
use crate::errors::{HuffError, HuffResult};
use crate::tools::options::CollisionPolicy;

/// Pairs each codeword with its alphabet symbol, sorted by codeword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(String, char)>,
}

impl CodeTable {
    /// Load a code table. Entry i of `codewords` is the bit string of `alphabet[i]`.
    ///
    /// Exact duplicates are either rejected or resolved in favor of the earlier entry,
    /// depending on `collisions`. Prefix conflicts are left for the tree builder to find.
    pub fn new<S: AsRef<str>>(
        codewords: &[S],
        alphabet: &Alphabet,
        collisions: CollisionPolicy,
    ) -> HuffResult<Self> {
        if codewords.is_empty() {
            error!("No codewords supplied.");
            return Err(HuffError::invalid("code table is empty"));
        }
        if codewords.len() > alphabet.len() {
            error!(
                "Code table has {} entries but the alphabet only has {} symbols.",
                codewords.len(),
                alphabet.len()
            );
            return Err(HuffError::invalid(format!(
                "code table has {} entries, alphabet has {} symbols",
                codewords.len(),
                alphabet.len()
            )));
        }

        let mut entries: Vec<(String, char)> = Vec::with_capacity(codewords.len());
        // Remember where each codeword first showed up so duplicates can name both symbols
        let mut seen: FxHashMap<&str, char> = FxHashMap::default();

        for (idx, codeword) in codewords.iter().enumerate() {
            let codeword = codeword.as_ref();
            // Checked against the table length above
            let symbol = alphabet
                .get(idx)
                .ok_or_else(|| HuffError::invalid("alphabet too short"))?;

            if let Some(pos) = codeword.chars().position(|c| c != '0' && c != '1') {
                error!("Codeword {:?} for {} is not a bit string.", codeword, symbol);
                return Err(HuffError::invalid(format!(
                    "codeword {:?} for {} has a non-binary character at {}",
                    codeword, symbol, pos
                )));
            }
            if codeword.is_empty() && codewords.len() > 1 {
                error!("Empty codeword for {} in a multi-entry table.", symbol);
                return Err(HuffError::invalid(format!(
                    "empty codeword for {} in a table of {} entries",
                    symbol,
                    codewords.len()
                )));
            }

            if let Some(&first) = seen.get(codeword) {
                match collisions {
                    CollisionPolicy::Reject => {
                        error!("Codeword {} is shared by {} and {}.", codeword, first, symbol);
                        return Err(HuffError::DuplicateCodeword {
                            codeword: codeword.to_string(),
                            first,
                            second: symbol,
                        });
                    }
                    CollisionPolicy::FirstWins => {
                        warn!(
                            "Codeword {} is shared by {} and {}. Keeping {}.",
                            codeword, first, symbol, first
                        );
                        continue;
                    }
                }
            }
            seen.insert(codeword, symbol);
            entries.push((codeword.to_string(), symbol));
        }

        // Sort by codeword so the tree is always built in the same order
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        info!("Loaded a code table of {} entries.", entries.len());

        Ok(Self { entries })
    }

    /// The (codeword, symbol) pairs in codeword order.
    pub fn entries(&self) -> &[(String, char)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the symbol assigned to `codeword`.
    #[cfg(test)]
    pub(crate) fn symbol_for(&self, codeword: &str) -> Option<char> {
        self.entries
            .binary_search_by(|(c, _)| c.as_str().cmp(codeword))
            .ok()
            .map(|idx| self.entries[idx].1)
    }
}
