use crate::dto::HealthRes;

/// Simple health service shared by every API surface
///
/// This service provides a standardised way to check the health status of the healthbot.
/// The knowledge base is static and translation failures are absorbed, so liveness is all
/// there is to report.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Healthbot is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_health_reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert_eq!(res.message, "Healthbot is alive");
    }
}
