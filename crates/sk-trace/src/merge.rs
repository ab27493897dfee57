use sk_core::PixelRef;

use crate::chain::Chain;

/// Which endpoints of a `dest` and a `src` chain coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joint {
    FrontFront,
    FrontBack,
    BackFront,
    BackBack,
}

impl Joint {
    /// Checked in this order for every `dest` chain.
    const PRECEDENCE: [Joint; 4] = [
        Joint::FrontFront,
        Joint::FrontBack,
        Joint::BackFront,
        Joint::BackBack,
    ];

    fn matches(self, dest: &[PixelRef], src: &[PixelRef]) -> bool {
        let (Some(d), Some(s)) = (self.dest_end(dest), self.src_end(src)) else {
            return false;
        };
        d == s
    }

    fn dest_end(self, dest: &[PixelRef]) -> Option<PixelRef> {
        match self {
            Joint::FrontFront | Joint::FrontBack => dest.first().copied(),
            Joint::BackFront | Joint::BackBack => dest.last().copied(),
        }
    }

    fn src_end(self, src: &[PixelRef]) -> Option<PixelRef> {
        match self {
            Joint::FrontFront | Joint::BackFront => src.first().copied(),
            Joint::FrontBack | Joint::BackBack => src.last().copied(),
        }
    }
}

/// Stitches the chains of two neighboring regions on shared endpoint pixels.
///
/// Every `dest` chain, in order, absorbs at most one unused `src` chain whose
/// endpoint coincides with one of its own, trying front-front, front-back,
/// back-front and back-back in that order. The shared pixel appears once in
/// the result. `src` chains that were not absorbed are appended unchanged,
/// keeping their relative order.
pub fn merge_chains(mut dest: Vec<Chain>, src: Vec<Chain>) -> Vec<Chain> {
    if dest.is_empty() {
        return src;
    }
    if src.is_empty() {
        return dest;
    }

    let mut consumed = vec![false; src.len()];
    for chain in &mut dest {
        let Some((j, joint)) = find_joint(chain, &src, &consumed) else {
            continue;
        };
        consumed[j] = true;
        splice(chain, &src[j], joint);
    }

    dest.extend(
        src.into_iter()
            .zip(consumed)
            .filter_map(|(chain, used)| (!used).then_some(chain)),
    );
    dest
}

fn find_joint(dest: &[PixelRef], src: &[Chain], consumed: &[bool]) -> Option<(usize, Joint)> {
    Joint::PRECEDENCE.into_iter().find_map(|joint| {
        src.iter()
            .zip(consumed)
            .position(|(s, &used)| !used && joint.matches(dest, s))
            .map(|j| (j, joint))
    })
}

fn splice(dest: &mut Chain, src: &[PixelRef], joint: Joint) {
    let extra = src.len().saturating_sub(1);
    match joint {
        Joint::FrontFront => {
            let mut joined = Vec::with_capacity(dest.len() + extra);
            joined.extend(src[1..].iter().rev());
            joined.append(dest);
            *dest = joined;
        }
        Joint::FrontBack => {
            let mut joined = Vec::with_capacity(dest.len() + extra);
            joined.extend_from_slice(&src[..extra]);
            joined.append(dest);
            *dest = joined;
        }
        Joint::BackFront => dest.extend_from_slice(&src[1..]),
        Joint::BackBack => dest.extend(src[..extra].iter().rev()),
    }
}

#[cfg(test)]
mod tests {
    use sk_core::BitGrid;

    use super::merge_chains;
    use crate::chain::Chain;

    struct Fixture {
        grid: BitGrid,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                grid: BitGrid::new(8, 8),
            }
        }

        fn chain(&self, pts: &[(usize, usize)]) -> Chain {
            pts.iter().map(|&(r, c)| self.grid.find(r, c)).collect()
        }

        fn coords(&self, chains: &[Chain]) -> Vec<Vec<(usize, usize)>> {
            chains
                .iter()
                .map(|chain| chain.iter().map(|&px| self.grid.coords(px)).collect())
                .collect()
        }
    }

    #[test]
    fn shared_endpoint_joins_in_either_order() {
        let f = Fixture::new();
        let ab = f.chain(&[(0, 0), (1, 1)]);
        let bc = f.chain(&[(1, 1), (2, 2)]);
        let want = vec![vec![(0, 0), (1, 1), (2, 2)]];

        assert_eq!(f.coords(&merge_chains(vec![ab.clone()], vec![bc.clone()])), want);
        assert_eq!(f.coords(&merge_chains(vec![bc], vec![ab])), want);
    }

    #[test]
    fn all_four_orientations() {
        let f = Fixture::new();
        let dest = || vec![f.chain(&[(1, 1), (1, 2), (1, 3)])];

        // front-front
        let got = merge_chains(dest(), vec![f.chain(&[(1, 1), (2, 1), (3, 1)])]);
        assert_eq!(f.coords(&got), vec![vec![(3, 1), (2, 1), (1, 1), (1, 2), (1, 3)]]);

        // front-back
        let got = merge_chains(dest(), vec![f.chain(&[(3, 1), (2, 1), (1, 1)])]);
        assert_eq!(f.coords(&got), vec![vec![(3, 1), (2, 1), (1, 1), (1, 2), (1, 3)]]);

        // back-front
        let got = merge_chains(dest(), vec![f.chain(&[(1, 3), (2, 3), (3, 3)])]);
        assert_eq!(f.coords(&got), vec![vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]]);

        // back-back
        let got = merge_chains(dest(), vec![f.chain(&[(3, 3), (2, 3), (1, 3)])]);
        assert_eq!(f.coords(&got), vec![vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]]);
    }

    #[test]
    fn front_joints_win_over_back_joints() {
        let f = Fixture::new();
        let dest = vec![f.chain(&[(1, 1), (1, 5)])];
        let src = vec![
            f.chain(&[(1, 5), (4, 5)]),
            f.chain(&[(4, 1), (1, 1)]),
        ];

        let got = merge_chains(dest, src);
        assert_eq!(
            f.coords(&got),
            vec![vec![(4, 1), (1, 1), (1, 5)], vec![(1, 5), (4, 5)]]
        );
    }

    #[test]
    fn each_dest_chain_absorbs_at_most_one() {
        let f = Fixture::new();
        let dest = vec![f.chain(&[(2, 2), (2, 4)]), f.chain(&[(6, 6), (2, 2)])];
        let src = vec![
            f.chain(&[(2, 2), (0, 2)]),
            f.chain(&[(2, 2), (4, 2)]),
            f.chain(&[(7, 7), (6, 7)]),
        ];

        let got = merge_chains(dest, src);
        assert_eq!(
            f.coords(&got),
            vec![
                vec![(0, 2), (2, 2), (2, 4)],
                vec![(6, 6), (2, 2), (4, 2)],
                vec![(7, 7), (6, 7)],
            ]
        );
    }

    #[test]
    fn empty_sides_pass_through() {
        let f = Fixture::new();
        let chains = vec![f.chain(&[(0, 0), (0, 1)])];

        assert_eq!(merge_chains(Vec::new(), chains.clone()), chains);
        assert_eq!(merge_chains(chains.clone(), Vec::new()), chains);
        assert!(merge_chains(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn closing_a_loop_repeats_the_endpoint() {
        let f = Fixture::new();
        let dest = vec![f.chain(&[(0, 0), (0, 3), (3, 3)])];
        let src = vec![f.chain(&[(3, 3), (3, 0), (0, 0)])];

        let got = merge_chains(dest, src);
        assert_eq!(
            f.coords(&got),
            vec![vec![(3, 3), (3, 0), (0, 0), (0, 3), (3, 3)]]
        );
    }
}
