mod tests {
    use myrtio_hsi_color::{
        Hsi, RgbCorrection, RgbwCorrection,
        convert::{hsi_to_rgb_with, hsi_to_rgbw_with},
        global_brightness, hsi_to_rgb, hsi_to_rgbw, set_global_brightness,
    };

    // Process-wide state: everything runs in a single test to keep the order fixed
    #[test]
    fn test_global_brightness() {
        let rgb_correction = RgbCorrection::default().with_gamma(1.0);
        let rgbw_correction = RgbwCorrection::default().with_gamma(1.0);
        let hsi = Hsi::new(0.0, 1.0, 1.0);

        assert_eq!(global_brightness(), 1.0);
        assert_eq!(
            hsi_to_rgbw(hsi, &rgbw_correction),
            hsi_to_rgbw_with(hsi, 1.0, &rgbw_correction)
        );

        set_global_brightness(2.0);
        assert_eq!(global_brightness(), 1.0);

        set_global_brightness(-1.0);
        assert_eq!(global_brightness(), 0.0);
        let rgbw = hsi_to_rgbw(hsi, &rgbw_correction);
        assert_eq!((rgbw.r, rgbw.g, rgbw.b, rgbw.w), (0.0, 0.0, 0.0, 0.0));

        set_global_brightness(0.5);
        assert_eq!(global_brightness(), 0.5);
        assert!((hsi_to_rgbw(hsi, &rgbw_correction).r - 0.5).abs() < 1e-4);
        assert!((hsi_to_rgb(hsi, &rgb_correction).r - 0.5).abs() < 1e-4);
        assert_eq!(
            hsi_to_rgb(hsi, &rgb_correction),
            hsi_to_rgb_with(hsi, 0.5, &rgb_correction)
        );
    }
}
