use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub cost: usize,
    pub path_len: usize,
    pub time_us: usize,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub evictions: usize,
    pub repair_calls: usize,
    pub repair_expanded_nodes: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Cost {:?} Path length {:?} Time(microseconds) {:?} Expand nodes number: {:?} Generated nodes number: {:?} Evictions: {:?} Repairs: {:?} Repair expand nodes number: {:?}",
            self.cost,
            self.path_len,
            self.time_us,
            self.expanded_nodes,
            self.generated_nodes,
            self.evictions,
            self.repair_calls,
            self.repair_expanded_nodes
        );
    }
}
