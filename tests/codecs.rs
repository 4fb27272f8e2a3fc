use afisviz::Pixmap;

fn checkered_pixmap() -> Pixmap {
    let mut pixmap = Pixmap::new(16, 16);
    for at in pixmap.size().grid() {
        // Varied color channels and deliberately varied alpha.
        let alpha = ((at.x * 16) % 256) as u32;
        let red = ((at.y * 16) % 256) as u32;
        let color = (alpha << 24) | (red << 16) | 0x00_33_77;
        pixmap.set_point(at, color);
    }
    pixmap
}

#[test]
fn png_round_trip_is_pixel_exact_including_alpha() {
    let pixmap = checkered_pixmap();
    let bytes = pixmap.png().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 16);
    for at in pixmap.size().grid() {
        let px = decoded.get_pixel(at.x as u32, at.y as u32).0;
        let argb = (u32::from(px[3]) << 24)
            | (u32::from(px[0]) << 16)
            | (u32::from(px[1]) << 8)
            | u32::from(px[2]);
        assert_eq!(argb, pixmap.get(at.x, at.y), "pixel {at}");
    }
}

#[test]
fn jpeg_output_is_fully_opaque_for_any_input_alpha() {
    let pixmap = checkered_pixmap();
    let bytes = pixmap.jpeg().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    for px in decoded.pixels() {
        assert_eq!(px.0[3], 255);
    }
}

#[test]
fn jpeg_of_transparent_pixmap_still_encodes() {
    let mut pixmap = Pixmap::new(8, 8);
    pixmap.fill(0x0000_0000);
    let bytes = pixmap.jpeg().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    for px in decoded.pixels() {
        assert_eq!(px.0[3], 255);
    }
}
