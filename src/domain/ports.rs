/// Source of the three classification thresholds.
pub trait ThresholdProvider: Send + Sync {
    fn volume_threshold(&self) -> u64;
    fn length_threshold(&self) -> u64;
    fn weight_threshold(&self) -> u64;
}
