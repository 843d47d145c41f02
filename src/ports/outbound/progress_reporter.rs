/// ProgressReporter port for user-facing progress while listings load
///
/// Output goes somewhere that does not mix with the rendered board
/// (stderr for the CLI).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many listings have settled so far
    ///
    /// # Arguments
    /// * `settled` - Listings whose fetch has finished
    /// * `total` - Listings being loaded
    /// * `message` - Optional message (e.g. the listing that just settled)
    fn report_progress(&self, settled: usize, total: usize, message: Option<&str>);

    /// Reports a warning, such as a listing that could not be fetched
    fn report_warning(&self, message: &str);

    /// Reports completion of the load
    fn report_completion(&self, message: &str);
}
