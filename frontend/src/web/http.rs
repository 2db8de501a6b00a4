//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 实现核心库的 [`HttpClient`] 特性。

use async_trait::async_trait;
use proyectalia::error::{ApiError, ApiResult};
use proyectalia::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, e: JsValue) -> ApiError {
    ApiError::transport(format!("{context}: {e:?}"))
}

/// 浏览器 fetch 客户端
///
/// 无状态，可随意复制。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build_request(req: &HttpRequest) -> ApiResult<Request> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| js_error("请求构建失败", e))
    }

    async fn read_text(response: &Response) -> ApiResult<String> {
        let promise = response.text().map_err(|e| js_error("读取响应失败", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("读取响应失败", e))?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let request = Self::build_request(&req)?;

        let window = web_sys::window().ok_or_else(|| ApiError::transport("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("Response 类型转换失败", e))?;

        let status = response.status();
        let body = Self::read_text(&response).await?;

        Ok(HttpResponse { status, body })
    }
}
