use super::edge_attributes::EdgeAttributes;
use super::profile_error::ProfileError;
use crate::model::network::EdgeProfileId;

/// append-only interner mapping [`EdgeProfileId`] to the
/// [`EdgeAttributes`] it stands for, shared by the whole graph. building
/// the graph populates it once; queries only read it.
#[derive(Clone, Debug, Default)]
pub struct ProfileDictionary {
    entries: Vec<EdgeAttributes>,
}

impl ProfileDictionary {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// intern `attributes`, returning the id it is now (or already) known
    /// under. does not deduplicate identical attribute bags; callers that
    /// want deduplication should maintain their own lookup while building.
    /// fails once the dictionary holds `u16::MAX` entries, since
    /// [`EdgeProfileId`] cannot represent more.
    pub fn intern(&mut self, attributes: EdgeAttributes) -> Result<EdgeProfileId, ProfileError> {
        if self.entries.len() >= u16::MAX as usize {
            return Err(ProfileError::TooManyEdgeProfiles(u16::MAX as usize));
        }
        let id = EdgeProfileId(self.entries.len() as u16);
        self.entries.push(attributes);
        Ok(id)
    }

    pub fn get(&self, id: EdgeProfileId) -> Result<&EdgeAttributes, ProfileError> {
        self.entries
            .get(id.0 as usize)
            .ok_or(ProfileError::UnknownEdgeProfileId(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_get() {
        let mut dict = ProfileDictionary::new();
        let mut attrs = EdgeAttributes::new();
        attrs.insert("highway", "residential");
        let id = dict.intern(attrs.clone()).unwrap();
        assert_eq!(dict.get(id).unwrap(), &attrs);
    }

    #[test]
    fn test_unknown_id() {
        let dict = ProfileDictionary::new();
        assert!(matches!(
            dict.get(EdgeProfileId(0)),
            Err(ProfileError::UnknownEdgeProfileId(EdgeProfileId(0)))
        ));
    }

    #[test]
    fn test_intern_fails_once_dictionary_is_full() {
        let mut dict = ProfileDictionary { entries: vec![EdgeAttributes::new(); u16::MAX as usize] };
        assert_eq!(dict.intern(EdgeAttributes::new()), Err(ProfileError::TooManyEdgeProfiles(u16::MAX as usize)));
    }
}
