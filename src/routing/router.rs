/// Routing decision - size threshold admission policy
/// Downstream submission path for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Horizontally scaled Glue job; workload too large for local compute
    ManagedJob,
    /// spark-submit on the handler's own compute instance
    LocalScript,
}

pub struct SizeRouter {
    threshold: u64,
}

impl SizeRouter {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// Workloads at or above the threshold go to the managed job service
    pub fn decide(&self, total_size: u64) -> RouteDecision {
        if total_size >= self.threshold {
            tracing::info!(
                total_size = total_size,
                threshold = self.threshold,
                "Routing to managed Glue job"
            );
            RouteDecision::ManagedJob
        } else {
            tracing::info!(
                total_size = total_size,
                threshold = self.threshold,
                "Routing to local spark-submit"
            );
            RouteDecision::LocalScript
        }
    }
}
