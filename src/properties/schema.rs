//! Shipped form schemas for the governance features the administration UI
//! exposes.  Names and their order come from the server's connector
//! definitions; reordering them would reorder update payloads.

use lazy_static::lazy_static;

use super::form::FormSchema;

lazy_static! {
    /// User self sign-up settings.
    pub static ref SELF_REGISTRATION: FormSchema = FormSchema::new(
        "self-sign-up",
        &[
            "SelfRegistration.Enable",
            "SelfRegistration.LockOnCreation",
            "SelfRegistration.Notification.InternallyManage",
            "SelfRegistration.ReCaptcha",
            "SelfRegistration.NotifyAccountConfirmation",
        ],
        &[
            "SelfRegistration.VerificationCode.ExpiryTime",
            "SelfRegistration.VerificationCode.SMSOTP.ExpiryTime",
            "SelfRegistration.CallbackRegex",
        ],
    )
    .unwrap();

    /// Password and username recovery settings.
    pub static ref ACCOUNT_RECOVERY: FormSchema = FormSchema::new(
        "account-recovery",
        &[
            "Recovery.Notification.Password.Enable",
            "Recovery.ReCaptcha.Password.Enable",
            "Recovery.Notification.Username.Enable",
            "Recovery.ReCaptcha.Username.Enable",
            "Recovery.Notification.InternallyManage",
            "Recovery.NotifySuccess",
        ],
        &[
            "Recovery.ExpiryTime",
            "Recovery.Notification.Password.ExpiryTime.smsOtp",
            "Recovery.CallbackRegex",
        ],
    )
    .unwrap();

    /// Account locking on failed login attempts.
    // The lock handler predates the governance naming convention, hence the
    // lowercase dotted prefix.
    pub static ref LOGIN_ATTEMPTS: FormSchema = FormSchema::new(
        "account.lock.handler",
        &[
            "account.lock.handler.enable",
            "account.lock.handler.notification.manageInternally",
        ],
        &[
            "account.lock.handler.On.Failure.Max.Attempts",
            "account.lock.handler.Time",
            "account.lock.handler.login.fail.timeout.ratio",
        ],
    )
    .unwrap();
}

/// Look up the shipped schema for a connector id, if we have one.
pub fn schema_for(connector_id: &str) -> Option<&'static FormSchema> {
    [
        &*SELF_REGISTRATION,
        &*ACCOUNT_RECOVERY,
        &*LOGIN_ATTEMPTS,
    ]
    .iter()
    .find(|schema| schema.connector_id() == connector_id)
    .copied()
}

#[cfg(test)]
mod test {
    use super::super::form::to_view_model;
    use super::{schema_for, ACCOUNT_RECOVERY, LOGIN_ATTEMPTS, SELF_REGISTRATION};
    use crate::model::ConfigProperty;
    use maplit::hashset;

    fn prop(name: &str, value: &str) -> ConfigProperty {
        ConfigProperty {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn lookup_by_connector_id() {
        assert_eq!(
            schema_for("self-sign-up").unwrap().connector_id(),
            SELF_REGISTRATION.connector_id()
        );
        assert_eq!(
            schema_for("account.lock.handler").unwrap().connector_id(),
            LOGIN_ATTEMPTS.connector_id()
        );
        assert!(schema_for("not-a-connector").is_none());
    }

    #[test]
    fn declared_names_are_unique_per_schema() {
        for schema in &[&*SELF_REGISTRATION, &*ACCOUNT_RECOVERY, &*LOGIN_ATTEMPTS] {
            let mut seen = hashset!();
            for name in schema.checkboxes().iter().chain(schema.scalars()) {
                assert!(seen.insert(name.as_ref()), "duplicate name {}", name);
            }
        }
    }

    #[test]
    fn self_registration_response_maps_to_view_model() {
        let properties = vec![
            prop("SelfRegistration.Enable", "true"),
            prop("SelfRegistration.LockOnCreation", "false"),
            prop("SelfRegistration.VerificationCode.ExpiryTime", "1440"),
            prop("SelfRegistration.VerificationCode.SMSOTP.ExpiryTime", "1"),
            prop("SelfRegistration.CallbackRegex", ".*"),
        ];
        let view = to_view_model(&SELF_REGISTRATION, &properties).unwrap();
        assert_eq!(
            view.checkbox_values,
            hashset!("SelfRegistration.Enable".to_string())
        );
        assert_eq!(
            view.scalar("SelfRegistration.VerificationCode.ExpiryTime"),
            Some("1440")
        );
    }

    #[test]
    fn recovery_schema_covers_both_channels() {
        let names: Vec<&str> = ACCOUNT_RECOVERY
            .checkboxes()
            .iter()
            .map(AsRef::as_ref)
            .collect();
        assert!(names.contains(&"Recovery.Notification.Password.Enable"));
        assert!(names.contains(&"Recovery.Notification.Username.Enable"));
    }
}
