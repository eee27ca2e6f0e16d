/// An entry that can live in a [`super::SelectionList`].
///
/// The key is the entry's identity: two entries with equal keys are the same
/// selection, regardless of the display snapshot they carry.
pub trait SelectionItem {
    type Key: Eq + Clone;

    fn key(&self) -> Self::Key;
}
