// ============================================================
// Layer 5 — Random Forest Classifier
// ============================================================
// An ensemble of binary decision trees exported in flat array
// form, one entry per node:
//
//   children_left[i]   index of the left child, -1 for a leaf
//   children_right[i]  index of the right child, -1 for a leaf
//   feature[i]         column tested at node i
//   threshold[i]       go left when x[feature] <= threshold
//   value[i]           [weight of class 0, weight of class 1]
//
// P(class) for a row is the mean over trees of the normalised
// class weights at the leaf the row lands in. The predicted
// class is the more probable one, ties going to class 0.
//
// Trees are compared in f32 because the trainer fitted the
// thresholds on f32 inputs; comparing in f64 can send values
// sitting exactly on a threshold down the other branch.

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineResult;
use crate::domain::features::FeatureMatrix;
use crate::domain::traits::Classifier;

const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left:  Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature:        Vec<i64>,
    pub threshold:      Vec<f64>,
    pub value:          Vec<[f64; 2]>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == LEAF
    }

    /// Check array lengths and links. Children must point forward,
    /// which rules out cycles and guarantees every walk terminates.
    fn validate(&self, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".into());
        }
        if [self.children_right.len(), self.feature.len(), self.threshold.len(), self.value.len()]
            .iter()
            .any(|&len| len != n)
        {
            return Err("tree arrays differ in length".into());
        }

        for i in 0..n {
            let (l, r) = (self.children_left[i], self.children_right[i]);
            if l == LEAF || r == LEAF {
                if l != r {
                    return Err(format!("node {i} has exactly one child"));
                }
                let [a, b] = self.value[i];
                if !(a.is_finite() && b.is_finite()) || a < 0.0 || b < 0.0 || a + b <= 0.0 {
                    return Err(format!("leaf {i} has no usable class weights"));
                }
                continue;
            }

            for child in [l, r] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(format!("node {i} links to invalid child {child}"));
                }
            }
            let f = self.feature[i];
            if f < 0 || f as usize >= n_features {
                return Err(format!("node {i} tests feature {f} of {n_features}"));
            }
        }
        Ok(())
    }

    /// Normalised class weights of the leaf `row` lands in
    fn leaf_distribution(&self, row: &[f64]) -> [f64; 2] {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let x = f64::from(row[self.feature[node] as usize] as f32);
            node = if x <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        let [a, b] = self.value[node];
        let total = a + b;
        [a / total, b / total]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees:      Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".into());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, input: &FeatureMatrix) -> PipelineResult<Vec<[f64; 2]>> {
        input.ensure_width("classifier", self.n_features)?;

        let n_trees = self.trees.len() as f64;
        Ok(input
            .iter_rows()
            .map(|row| {
                let [p0, p1] = self.trees.iter().fold([0.0, 0.0], |acc, tree| {
                    let [a, b] = tree.leaf_distribution(row);
                    [acc[0] + a, acc[1] + b]
                });
                [p0 / n_trees, p1 / n_trees]
            })
            .collect())
    }
}
