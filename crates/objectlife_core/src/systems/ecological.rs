use crate::config::ResourceConfig;
use objectlife_data::Site;

/// Converts a full work quota into food.
///
/// When the site's accumulated work is a non-zero multiple of the quota the
/// counter resets and, unless sites are infinite, the site loses one unit of
/// utility. Returns how many food items the caller should scatter, or `None`
/// when the quota is not met.
pub fn site_production(site: &mut Site, config: &ResourceConfig) -> Option<u32> {
    if site.work_done == 0 || site.work_done % config.work_needed != 0 {
        return None;
    }
    site.work_done = 0;
    if !config.site_infinite {
        site.utility = site.utility.saturating_sub(1);
    }
    Some(config.work_needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use objectlife_data::Position;
    use uuid::Uuid;

    fn site(work_done: u32) -> Site {
        let mut s = Site::new(Uuid::nil(), Position::new(0.0, 0.0), 10.0, 6);
        s.work_done = work_done;
        s
    }

    #[test]
    fn test_quota_not_met() {
        let config = ResourceConfig::default();
        let mut s = site(4);
        assert_eq!(site_production(&mut s, &config), None);
        assert_eq!(s.work_done, 4);
        assert_eq!(s.utility, 6);

        let mut idle = site(0);
        assert_eq!(site_production(&mut idle, &config), None);
    }

    #[test]
    fn test_quota_met_produces_and_depletes() {
        let config = ResourceConfig::default();
        let mut s = site(5);
        assert_eq!(site_production(&mut s, &config), Some(5));
        assert_eq!(s.work_done, 0);
        assert_eq!(s.utility, 5);
    }

    #[test]
    fn test_infinite_site_keeps_utility() {
        let config = ResourceConfig {
            site_infinite: true,
            ..Default::default()
        };
        let mut s = site(5);
        assert_eq!(site_production(&mut s, &config), Some(5));
        assert_eq!(s.utility, 6);
    }

    #[test]
    fn test_last_unit_exhausts_site() {
        let config = ResourceConfig::default();
        let mut s = site(5);
        s.utility = 1;
        site_production(&mut s, &config);
        assert!(s.is_exhausted());
    }
}
