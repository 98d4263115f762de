use super::*;

#[test]
fn transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn opaque_src_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn transparent_dst_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn half_alpha_over_opaque_mixes_channels() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    for c in &out[..3] {
        // Straight-alpha mix of white over black at ~50%.
        assert!((126..=130).contains(c), "channel {c} out of range");
    }
}

#[test]
fn over_in_place_walks_whole_buffer() {
    let mut dst = vec![0u8; 8];
    let src = [[1, 2, 3, 255], [4, 5, 6, 255]].concat();
    over_in_place(&mut dst, &src).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    let mut odd = vec![0u8; 6];
    assert!(over_in_place(&mut odd, &[0u8; 6]).is_err());
}
