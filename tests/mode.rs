mod tests {
    use matrix_light_animator::ModeId;

    #[test]
    fn test_mode_id_parse_gyro() {
        assert_eq!(ModeId::parse_from_str("GYRO"), Some(ModeId::Gyro));
    }

    #[test]
    fn test_mode_id_from_raw_gyro() {
        assert_eq!(ModeId::from_raw(2), Some(ModeId::Gyro));
    }

    #[test]
    fn test_mode_id_parse_vertical() {
        assert_eq!(ModeId::parse_from_str("VERTICAL"), Some(ModeId::Vertical));
    }

    #[test]
    fn test_mode_id_from_raw_vertical() {
        assert_eq!(ModeId::from_raw(3), Some(ModeId::Vertical));
    }

    #[test]
    fn test_mode_id_as_str() {
        assert_eq!(ModeId::Boot.as_str(), "BOOT");
        assert_eq!(ModeId::Idle.as_str(), "IDLE");
        assert_eq!(ModeId::Gyro.as_str(), "GYRO");
        assert_eq!(ModeId::Vertical.as_str(), "VERTICAL");
    }

    #[test]
    fn test_mode_id_from_raw_round_trips() {
        for mode in [ModeId::Boot, ModeId::Idle, ModeId::Gyro, ModeId::Vertical] {
            assert_eq!(ModeId::from_raw(mode as u8), Some(mode));
        }
    }

    #[test]
    fn test_mode_id_rejects_unknown() {
        assert_eq!(ModeId::parse_from_str("gyro"), None);
        assert_eq!(ModeId::parse_from_str("DISCO"), None);
        assert_eq!(ModeId::from_raw(4), None);
    }

    #[test]
    fn test_only_sweep_modes_have_drivers() {
        assert!(ModeId::Gyro.has_driver());
        assert!(ModeId::Vertical.has_driver());
        assert!(!ModeId::Boot.has_driver());
        assert!(!ModeId::Idle.has_driver());
    }
}
