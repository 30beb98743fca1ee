//all the methods of calculating medians, averages and variances of day counts

/// Element `len / 2` of the sorted slice.
/// For an even count this is the upper of the two middle elements, nothing is averaged.
///
/// # Panics
/// if `slice` is empty
pub fn median_at_half(slice: &[u32]) -> u32
{
    assert!(!slice.is_empty(), "median of no values");
    let mut sorted = slice.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}

/// Mean and population variance of a sample of day counts
#[derive(Clone, Debug, PartialEq)]
pub struct MeanVariance
{
    pub mean: f64,
    pub var: f64
}

impl MeanVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance(&self) -> f64
    {
        self.var
    }

    pub fn from_slice(slice: &[u32]) -> Self
    {
        let mean = calc_average(slice);
        let var = calc_variance(slice, mean);
        Self{
            mean,
            var
        }
    }
}

pub fn calc_average(slice: &[u32]) -> f64
{
    let sum: u64 = slice.iter()
        .map(|&val| val as u64)
        .sum();
    sum as f64 / slice.len() as f64
}

pub fn calc_variance(slice: &[u32], average: f64) -> f64
{
    let var_sum: f64 = slice.iter()
        .map(|&val| {
            let dif = average - val as f64;
            dif * dif
        }).sum();
    var_sum / slice.len() as f64
}
