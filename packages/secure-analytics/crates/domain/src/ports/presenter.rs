use crate::scoring::ScoreReport;

/// Receives fresh scores after every successful recompute.
pub trait ScorePresenter {
    fn present(&self, report: &ScoreReport);
}
