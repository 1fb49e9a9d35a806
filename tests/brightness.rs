mod tests {
    use pixel_control::{Brightness, Ramp};

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(Brightness::new(1.5), Brightness::FULL);
        assert_eq!(Brightness::new(-0.2), Brightness::OFF);
        assert_eq!(Brightness::new(f32::NAN), Brightness::OFF);
        assert_eq!(Brightness::try_new(1.01), None);
        assert_eq!(Brightness::try_new(0.3).map(Brightness::get), Some(0.3));
    }

    #[test]
    fn test_brightness_as_u8() {
        assert_eq!(Brightness::OFF.as_u8(), 0);
        assert_eq!(Brightness::FULL.as_u8(), 255);
        assert_eq!(Brightness::new(0.5).as_u8(), 128);
    }

    #[test]
    fn test_ramp_up_to_half_takes_fifty_steps() {
        let ramp = Ramp::new(Brightness::OFF, Brightness::new(0.5));
        assert_eq!(ramp.len(), 50);

        let levels: Vec<f32> = ramp.map(Brightness::get).collect();
        assert_eq!(levels.len(), 50);
        assert_eq!(levels.last().copied(), Some(0.5));
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        assert!((levels[0] - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_ramp_down_lands_on_zero() {
        let levels: Vec<f32> = Ramp::new(Brightness::FULL, Brightness::OFF)
            .map(Brightness::get)
            .collect();
        assert_eq!(levels.len(), 100);
        assert_eq!(levels.last().copied(), Some(0.0));
        assert!(levels.iter().all(|level| (0.0..=1.0).contains(level)));
        assert!(levels.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_ramp_to_odd_target_does_not_overshoot() {
        let target = Brightness::new(0.337);
        let levels: Vec<Brightness> = Ramp::new(Brightness::OFF, target).collect();
        assert_eq!(levels.len(), 34);
        assert_eq!(levels.last().copied(), Some(target));
        assert!(levels.iter().all(|level| *level <= target));
    }

    #[test]
    fn test_ramp_across_tiny_distance_takes_one_step() {
        let target = Brightness::new(0.000_005);
        let ramp = Ramp::new(Brightness::OFF, target);
        assert_eq!(ramp.target(), target);
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.collect::<Vec<_>>(), vec![target]);

        let back: Vec<Brightness> = Ramp::new(target, Brightness::OFF).collect();
        assert_eq!(back, vec![Brightness::OFF]);
    }

    #[test]
    fn test_ramp_to_current_level_is_empty() {
        let level = Brightness::new(0.42);
        let mut ramp = Ramp::new(level, level);
        assert_eq!(ramp.target(), level);
        assert_eq!(ramp.len(), 0);
        assert_eq!(ramp.next(), None);
    }
}
