#[non_exhaustive]
pub struct ReplicateModelVersion;

impl ReplicateModelVersion {
    /// anotherjesse/zeroscope-v2-xl
    pub const ZEROSCOPE_V2_XL: &'static str =
        "9f747673945c62801b13b84701c783929c0ee784e4748ec062204894dda1a351";
}
