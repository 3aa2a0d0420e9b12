use std::sync::OnceLock;

use crate::grid::{DistributionGrids, build_distribution_grids};

/// Full-resolution grids, built once for the whole test binary.
pub(crate) fn shared_grids() -> &'static DistributionGrids {
    static GRIDS: OnceLock<DistributionGrids> = OnceLock::new();
    GRIDS.get_or_init(build_distribution_grids)
}
