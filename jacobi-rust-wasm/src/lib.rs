use jacobi_core::Jacobi as JacobiCore;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Jacobi {
    inner: JacobiCore<f32>,
}

#[wasm_bindgen]
impl Jacobi {
    #[wasm_bindgen(constructor)]
    pub fn new(n: usize, m: usize) -> Result<Jacobi, JsValue> {
        let inner = JacobiCore::new(n, m).map_err(to_js)?;
        Ok(Jacobi { inner })
    }

    pub fn reset(&mut self) { self.inner.reset(); }

    pub fn n(&self) -> usize { self.inner.n() }
    pub fn m(&self) -> usize { self.inner.m() }
    pub fn iterations(&self) -> usize { self.inner.iterations() }
    pub fn checksum(&self) -> f64 { self.inner.checksum() }

    // Copy-based JS access
    pub fn get_field(&self) -> Vec<f32> {
        self.inner.field().to_vec()
    }

    // Step + timing (WASM-only)
    pub fn step(&mut self, iters: usize) -> Result<StepInfo, JsValue> {
        let t0 = now_ms();
        let mut info = self.advance(iters).map_err(to_js)?;
        info.compute_ms = now_ms() - t0;
        Ok(info)
    }
}

impl Jacobi {
    /// Runs `iters` steps without touching any JS import.
    fn advance(&mut self, iters: usize) -> jacobi_core::Result<StepInfo> {
        self.inner.run(iters)?;
        Ok(StepInfo { iters, compute_ms: 0.0 })
    }
}

#[wasm_bindgen]
pub struct StepInfo {
    iters: usize,
    compute_ms: f64,
}

#[wasm_bindgen]
impl StepInfo {
    pub fn iters(&self) -> usize { self.iters }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
}

fn to_js(e: jacobi_core::JacobiError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
