use crate::graph::{PersonId, StarGraph};
use crate::name_normalization::clean_name;
use rustc_hash::FxHashMap;

/// One person sharing a queried name, with enough metadata for a caller to
/// present a disambiguation choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

/// Outcome of resolving a free-text name against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nobody carries this name; the caller reports "not found".
    NotFound,
    /// Exactly one match.
    Unique(PersonId),
    /// Several people share the name. The caller presents the candidates and
    /// feeds the picked id back through [`confirm_selection`].
    Ambiguous(Vec<Candidate>),
}

/// Normalized display name -> everyone carrying it. Built once from the
/// graph, read-only afterwards. Disambiguation stays outside: the index
/// produces candidates and validates a selection, it never blocks on input.
pub struct NameIndex {
    lookup: FxHashMap<String, Vec<Candidate>>,
}

impl NameIndex {
    pub fn build(graph: &StarGraph) -> Self {
        let mut lookup: FxHashMap<String, Vec<Candidate>> = FxHashMap::default();
        for person in graph.people() {
            lookup
                .entry(clean_name(&person.name))
                .or_default()
                .push(Candidate {
                    id: person.id,
                    name: person.name.clone(),
                    birth: person.birth,
                });
        }
        // Candidate rosters in id order, so ambiguous prompts are stable.
        for candidates in lookup.values_mut() {
            candidates.sort_unstable_by_key(|candidate| candidate.id);
        }
        Self { lookup }
    }

    pub fn resolve(&self, name: &str) -> Resolution {
        match self.lookup.get(&clean_name(name)).map(Vec::as_slice) {
            None | Some([]) => Resolution::NotFound,
            Some([candidate]) => Resolution::Unique(candidate.id),
            Some(candidates) => Resolution::Ambiguous(candidates.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Validate a follow-up disambiguation choice. Anything that does not parse
/// as an id, or parses to an id outside the candidate set, resolves to
/// `None` ("not found") rather than silently picking a candidate.
pub fn confirm_selection(candidates: &[Candidate], raw: &str) -> Option<PersonId> {
    let chosen = raw.trim().parse::<u32>().ok().map(PersonId)?;
    candidates
        .iter()
        .find(|candidate| candidate.id == chosen)
        .map(|candidate| candidate.id)
}
