/// A `ParamGen` generates values for the initial state of the model's parameters.
pub trait ParamGen {
    /// Samples exactly `n` parameters.
    ///
    /// # Arguments
    /// * `n` - The amount of parameters to generate.
    fn sample(&mut self, n: usize) -> Vec<f64>;
}
