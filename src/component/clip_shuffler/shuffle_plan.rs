use super::clip::Clip;
use rand::Rng;
use rand::seq::SliceRandom;

/// A uniformly sampled permutation of clip indices.
///
/// `order[position] == index` means the clip at `index` in the scanned set
/// plays at `position` in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShufflePlan {
    order: Vec<usize>,
}

impl ShufflePlan {
    #[must_use]
    pub fn generate(len: usize) -> Self {
        Self::generate_with(len, &mut rand::thread_rng())
    }

    /// Fisher-Yates over `0..len` driven by `rng`.
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        Self { order }
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reorders `clips` by the plan and stamps each with its position.
    ///
    /// `clips` must have the length the plan was generated for.
    #[must_use]
    pub fn arrange(&self, clips: Vec<Clip>) -> Vec<Clip> {
        debug_assert_eq!(clips.len(), self.order.len());

        let mut slots: Vec<Option<Clip>> = clips.into_iter().map(Some).collect();
        self.order
            .iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                let mut clip = slots.get_mut(index)?.take()?;
                clip.position = Some(position);
                Some(clip)
            })
            .collect()
    }
}
