mod tests {
    use pixel_control::{
        Animation, Brightness, ColorSelection, ConfigError, LightConfig, PixelProvider, Preset,
        ProviderSlot, RawOptions, Transition, rgbw,
    };

    fn preset(name: &str) -> RawOptions<'_> {
        RawOptions {
            preset: Some(name),
            ..RawOptions::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = LightConfig::new(&preset("blue")).unwrap();
        assert_eq!(config.selection, ColorSelection::Preset(Preset::Blue));
        assert_eq!(config.brightness, Brightness::FULL);
        assert_eq!(config.pixel_count.get(), 24);
        assert_eq!(config.transition, None);
        assert_eq!(config.animation, None);
    }

    #[test]
    fn test_color_selection_is_exclusive() {
        let neither = RawOptions::default();
        assert_eq!(LightConfig::new(&neither), Err(ConfigError::MissingColor));

        let both = RawOptions {
            preset: Some("red"),
            color: Some([1, 2, 3, 4]),
            ..RawOptions::default()
        };
        assert_eq!(LightConfig::new(&both), Err(ConfigError::ConflictingColor));
    }

    #[test]
    fn test_explicit_color() {
        let options = RawOptions {
            color: Some([1, 2, 3, 4]),
            ..RawOptions::default()
        };
        let config = LightConfig::new(&options).unwrap();
        assert_eq!(config.selection, ColorSelection::Explicit(rgbw(1, 2, 3, 4)));
        assert_eq!(config.provider().pixel_color(17), rgbw(1, 2, 3, 4));
    }

    #[test]
    fn test_invalid_values() {
        let options = RawOptions {
            pixel_count: 0,
            ..preset("rainbow")
        };
        assert_eq!(LightConfig::new(&options), Err(ConfigError::InvalidPixelCount(0)));

        let options = RawOptions {
            brightness: 1.5,
            ..preset("red")
        };
        assert_eq!(LightConfig::new(&options), Err(ConfigError::InvalidBrightness(1.5)));

        assert!(matches!(
            LightConfig::new(&RawOptions {
                brightness: f32::NAN,
                ..preset("red")
            }),
            Err(ConfigError::InvalidBrightness(_))
        ));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(LightConfig::new(&preset("mauve")), Err(ConfigError::UnknownPreset));

        let options = RawOptions {
            transition: Some("wipe"),
            ..preset("red")
        };
        assert_eq!(LightConfig::new(&options), Err(ConfigError::UnknownTransition));

        let options = RawOptions {
            animation: Some("strobe"),
            ..preset("red")
        };
        assert_eq!(LightConfig::new(&options), Err(ConfigError::UnknownAnimation));
    }

    #[test]
    fn test_transition_and_animation_together() {
        let options = RawOptions {
            transition: Some("fade-in"),
            animation: Some("breathe"),
            brightness: 0.4,
            ..preset("rainbow")
        };
        let config = LightConfig::new(&options).unwrap();
        assert_eq!(config.transition, Some(Transition::FadeIn));
        assert_eq!(config.animation, Some(Animation::Breathe));
        assert_eq!(config.brightness, Brightness::new(0.4));
        assert!(matches!(config.provider(), ProviderSlot::Rainbow(_)));
    }
}
