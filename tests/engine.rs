mod tests {
    use myrtio_hsi_color::{
        ColorEngine, ColorEngineConfig, Hsi, PwmOutput, RgbCorrection, RgbPwm, RgbwCorrection,
        RgbwPwm,
        convert::{hsi_to_rgb_with, hsi_to_rgbw_with},
    };

    struct RecordingOutput<D> {
        max_duty: u32,
        written: Option<D>,
    }

    impl<D> RecordingOutput<D> {
        fn new(max_duty: u32) -> Self {
            Self {
                max_duty,
                written: None,
            }
        }
    }

    impl<D> PwmOutput for RecordingOutput<D> {
        type Duty = D;

        fn max_duty(&self) -> u32 {
            self.max_duty
        }

        fn write(&mut self, duty: D) {
            self.written = Some(duty);
        }
    }

    fn linear_config(brightness: f32) -> ColorEngineConfig {
        ColorEngineConfig {
            brightness,
            rgb: RgbCorrection::default().with_gamma(1.0),
            rgbw: RgbwCorrection::default().with_gamma(1.0),
        }
    }

    #[test]
    fn test_default_engine() {
        let engine = ColorEngine::default();
        assert_eq!(engine.brightness(), 1.0);
        assert_eq!(*engine.rgb_correction(), RgbCorrection::default());
        assert_eq!(*engine.rgbw_correction(), RgbwCorrection::default());
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut engine = ColorEngine::new(&linear_config(3.0));
        assert_eq!(engine.brightness(), 1.0);

        engine.set_brightness(2.0);
        assert_eq!(engine.brightness(), 1.0);
        engine.set_brightness(-1.0);
        assert_eq!(engine.brightness(), 0.0);
        engine.set_brightness(0.25);
        assert_eq!(engine.brightness(), 0.25);
    }

    #[test]
    fn test_engine_matches_explicit_conversion() {
        let config = linear_config(0.6);
        let engine = ColorEngine::new(&config);
        let hsi = Hsi::new(0.7, 0.4, 0.9);

        assert_eq!(engine.hsi_to_rgb(hsi), hsi_to_rgb_with(hsi, 0.6, &config.rgb));
        assert_eq!(
            engine.hsi_to_rgbw(hsi),
            hsi_to_rgbw_with(hsi, 0.6, &config.rgbw)
        );
    }

    #[test]
    fn test_brightness_applies_to_both_paths() {
        let mut engine = ColorEngine::new(&linear_config(1.0));
        let red = Hsi::new(0.0, 1.0, 1.0);
        engine.set_brightness(0.5);

        assert!((engine.hsi_to_rgb(red).r - 0.5).abs() < 1e-4);
        assert!((engine.hsi_to_rgbw(red).r - 0.5).abs() < 1e-4);

        engine.set_brightness(0.0);
        let rgb = engine.hsi_to_rgb(red);
        assert_eq!((rgb.r, rgb.g, rgb.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_engines_are_independent() {
        let dim = ColorEngine::new(&linear_config(0.2));
        let bright = ColorEngine::new(&linear_config(1.0));
        let white = Hsi::new(0.0, 0.0, 1.0);

        assert!((dim.hsi_to_rgbw(white).w - 0.2).abs() < 1e-4);
        assert!((bright.hsi_to_rgbw(white).w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_corrections_can_be_replaced() {
        let mut engine = ColorEngine::new(&linear_config(1.0));
        engine.set_rgb_correction(RgbCorrection::default().with_gamma(1.0).with_scale([1.0, 0.5, 1.0]));
        engine.set_rgbw_correction(
            RgbwCorrection::default()
                .with_gamma(1.0)
                .with_scale([1.0, 1.0, 1.0, 0.5]),
        );

        let green = Hsi::new(1.0 / 3.0, 1.0, 1.0);
        assert!((engine.hsi_to_rgb(green).g - 0.5).abs() < 1e-3);

        let white = Hsi::new(0.0, 0.0, 1.0);
        assert!((engine.hsi_to_rgbw(white).w - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_write_rgbw() {
        let engine = ColorEngine::new(&linear_config(1.0));
        let mut output = RecordingOutput::<RgbwPwm>::new(255);

        engine.write_rgbw(Hsi::new(0.0, 1.0, 1.0), &mut output);
        assert_eq!(
            output.written,
            Some(RgbwPwm {
                r: 255,
                g: 0,
                b: 0,
                w: 0
            })
        );
    }

    #[test]
    fn test_write_rgb() {
        let engine = ColorEngine::new(&linear_config(1.0));
        let mut output = RecordingOutput::<RgbPwm>::new(1023);

        engine.write_rgb(Hsi::new(0.0, 0.0, 1.0), &mut output);
        assert_eq!(
            output.written,
            Some(RgbPwm {
                r: 341,
                g: 341,
                b: 341
            })
        );
    }
}
