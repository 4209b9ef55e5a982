use image::imageops::FilterType;
use shared::Prediction;
use std::path::Path;
use std::sync::Mutex;
use tch::nn::ModuleT;
use tch::{CModule, Device, Kind, Tensor};
use thiserror::Error;

/// Output classes of the pretrained lesion model, in output-head order.
pub const CLASS_LABELS: [&str; 7] = [
    "actinic_keratoses",
    "basal_cell_carcinoma",
    "benign_keratosis",
    "dermatofibroma",
    "melanocytic_nevi",
    "melanoma",
    "vascular_lesions",
];

const INPUT_SIZE: u32 = 224;
const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("model execution failed: {0}")]
    Model(#[from] tch::TchError),
    #[error("model returned {got} scores for {expected} classes")]
    ScoreShape { got: usize, expected: usize },
}

/// Seam between the HTTP layer and the pretrained model so handlers and
/// tests can run against a stub.
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, ClassifierError>;
}

/// TorchScript-backed classifier. Constructed once at startup and shared;
/// loading the module is the expensive part.
pub struct TorchClassifier {
    module: Mutex<CModule>,
    device: Device,
}

impl TorchClassifier {
    pub fn load(model_path: &Path) -> Result<Self, ClassifierError> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(model_path, device)?;
        Ok(Self {
            module: Mutex::new(module),
            device,
        })
    }

    fn preprocess(&self, image: &[u8]) -> Result<Tensor, ClassifierError> {
        let decoded = image::load_from_memory(image)?;
        let resized = decoded
            .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
            .to_rgb8();

        // HWC u8 -> CHW f32 with ImageNet normalization.
        let plane = (INPUT_SIZE * INPUT_SIZE) as usize;
        let mut chw = vec![0.0f32; 3 * plane];
        for (i, pixel) in resized.pixels().enumerate() {
            for c in 0..3 {
                chw[c * plane + i] = (pixel[c] as f32 / 255.0 - IMAGENET_MEAN[c]) / IMAGENET_STD[c];
            }
        }

        let tensor = Tensor::from_slice(&chw)
            .view([1, 3, INPUT_SIZE as i64, INPUT_SIZE as i64])
            .to_device(self.device);
        Ok(tensor)
    }
}

impl Classifier for TorchClassifier {
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, ClassifierError> {
        let input = self.preprocess(image)?;
        let output = self.module.lock().unwrap().forward_t(&input, false);
        let probs = output.softmax(-1, Kind::Float).view([-1]);

        let num_elements = probs.size()[0] as usize;
        if num_elements != CLASS_LABELS.len() {
            return Err(ClassifierError::ScoreShape {
                got: num_elements,
                expected: CLASS_LABELS.len(),
            });
        }

        let mut scores = vec![0.0f32; num_elements];
        probs.copy_data(&mut scores, num_elements);

        let mut predictions: Vec<Prediction> = CLASS_LABELS
            .iter()
            .zip(scores)
            .map(|(label, score)| Prediction {
                label: (*label).to_string(),
                score,
            })
            .collect();
        predictions.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(predictions)
    }
}
