//! 重定向目标
//!
//! 所有路由挂载在 `/classes` 下，路径与路由表保持一致。

pub const MOUNT: &str = "/classes";

pub const ALL_CLASSES: &str = "/classes/all_classes";
pub const ALL_SCHEDULED_CLASSES: &str = "/classes/all_scheduled_classes";
pub const ALL_VAULTS: &str = "/classes/all_vaults";

pub fn class_detail(id: i64) -> String {
    format!("{MOUNT}/class/{id}/")
}

pub fn scheduled_class_detail(id: i64) -> String {
    format!("{MOUNT}/scheduled_class/{id}/")
}

// 排课更新后回到自身的更新页，而不是详情页
pub fn scheduled_class_update(id: i64) -> String {
    format!("{MOUNT}/scheduled_class/{id}/update/")
}

pub fn vault_detail(id: i64) -> String {
    format!("{MOUNT}/vault/{id}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        assert_eq!(class_detail(3), "/classes/class/3/");
        assert_eq!(scheduled_class_detail(4), "/classes/scheduled_class/4/");
        assert_eq!(
            scheduled_class_update(4),
            "/classes/scheduled_class/4/update/"
        );
        assert_eq!(vault_detail(5), "/classes/vault/5/");
    }
}
