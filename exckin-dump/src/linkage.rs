use exckin_core::linkage::LinkageGeometry;

/// Linkage table of the laboratory test bed, in centimeters.
///
/// Measured on the instrumented mini excavator; the cylinder triangles
/// stay well-posed over the full stroke envelope (boom 0-10, arm 0-8,
/// attachment 0-6).
pub(crate) fn test_bed() -> LinkageGeometry {
    LinkageGeometry {
        a1: 12.0,
        a2: 33.0,
        a3: 16.0,
        a4: 9.6,
        gnd_offset: 17.1,
        r_cyl1: 22.5,
        r_o1a: 7.0,
        r_o1b: 27.0,
        a_b12: 0.74,
        a_a1x1: 0.223,
        r_cyl2: 21.9,
        r_o2c: 23.5,
        r_o2d: 7.5,
        a_12c: 1.6,
        a_d23: 1.242,
        r_cyl3: 12.0,
        r_ef: 6.5,
        r_fh: 14.0,
        a_dfe: 0.85,
        r_o3f: 4.5,
        r_o3g: 7.0,
        r_gh: 7.5,
        a_g34: 0.85,
        a_23d: 0.29,
    }
}
