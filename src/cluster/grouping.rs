use std::collections::BTreeMap;

use crate::point::{Label, Point};

/// Group points by their label.
///
/// Keys are ordered noise first, then clusters by ordinal; each group keeps the points in
/// input order.
pub fn group_by_label(points: &[Point]) -> BTreeMap<Label, Vec<Point>> {
    let mut groups: BTreeMap<Label, Vec<Point>> = BTreeMap::new();
    for p in points {
        groups.entry(p.label()).or_default().push(*p);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_label_preserves_order_and_coords() {
        let mut points: Vec<Point> = [[0.0, 1.0], [5.0, 5.0], [0.0, 2.0], [9.0, 9.0]]
            .into_iter()
            .map(|c| Point::try_from(c).unwrap())
            .collect();
        points[0].set_label(Label::Cluster(0));
        points[1].set_label(Label::Cluster(1));
        points[2].set_label(Label::Cluster(0));
        points[3].set_label(Label::Noise);

        let groups = group_by_label(&points);
        let keys: Vec<Label> = groups.keys().copied().collect();
        assert_eq!(keys, vec![Label::Noise, Label::Cluster(0), Label::Cluster(1)]);

        let c0: Vec<&[f64]> = groups[&Label::Cluster(0)].iter().map(Point::coords).collect();
        assert_eq!(c0, vec![&[0.0, 1.0][..], &[0.0, 2.0][..]]);
        assert_eq!(groups[&Label::Noise][0].coords(), &[9.0, 9.0]);
    }

    #[test]
    fn test_group_by_label_empty() {
        assert!(group_by_label(&[]).is_empty());
    }
}
