//! 服务声明宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Ident,
    ItemStruct, Lit, Meta, Path, Result, Token,
};

/// 服务生命周期参数
#[derive(Debug, Clone, PartialEq)]
pub enum LifetimeArg {
    Singleton,
    Scoped,
    Transient,
}

impl LifetimeArg {
    /// 对应的运行时生命周期变体
    fn variant(&self) -> proc_macro2::TokenStream {
        match self {
            LifetimeArg::Singleton => quote! { registration_common::Lifetime::Singleton },
            LifetimeArg::Scoped => quote! { registration_common::Lifetime::Scoped },
            LifetimeArg::Transient => quote! { registration_common::Lifetime::Transient },
        }
    }
}

/// 服务声明参数
#[derive(Debug, Clone, Default)]
pub struct ServiceArgs {
    /// 生命周期，必填
    pub lifetime: Option<LifetimeArg>,
    /// 暴露的服务接口，保持书写顺序
    pub expose: Vec<Path>,
    /// 自定义服务名称
    pub name: Option<String>,
}

impl Parse for ServiceArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ServiceArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("singleton") {
                        args.lifetime = Some(LifetimeArg::Singleton);
                    } else if path.is_ident("scoped") {
                        args.lifetime = Some(LifetimeArg::Scoped);
                    } else if path.is_ident("transient") {
                        args.lifetime = Some(LifetimeArg::Transient);
                    }
                }
                Meta::List(list) => {
                    if list.path.is_ident("expose") {
                        let interfaces =
                            list.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
                        args.expose = interfaces.into_iter().collect();
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.name = Some(lit_str.value());
                            }
                        }
                    }
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[service] 宏
pub fn service_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let service_args = match syn::parse::<ServiceArgs>(args) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error().into(),
    };

    let lifetime = match service_args.lifetime {
        Some(ref lifetime) => lifetime.variant(),
        None => {
            return syn::Error::new(
                Span::call_site(),
                "service 宏需要指定生命周期参数 (singleton、scoped 或 transient)",
            )
            .to_compile_error()
            .into()
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(&input_struct.generics, "service 宏不支持泛型结构体")
            .to_compile_error()
            .into();
    }

    let struct_name = &input_struct.ident;
    let struct_name_string = struct_name.to_string();
    let service_name = service_args.name.as_deref().unwrap_or(&struct_name_string);

    let provides_checks = generate_provides_checks(struct_name, &service_args.expose);

    let declared_impl = generate_declared_service_impl(
        struct_name,
        service_name,
        &lifetime,
        &service_args.expose,
    );

    let ctor_registration = generate_ctor_registration(struct_name);

    let expanded = quote! {
        #input_struct

        #provides_checks

        #declared_impl

        #ctor_registration
    };

    TokenStream::from(expanded)
}

/// 生成接口实现校验代码
///
/// 每个暴露的接口生成一次到 trait 对象的强制转换，结构体未实现
/// 该接口或接口不是对象安全时在宏展开处报编译错误。
fn generate_provides_checks(struct_name: &Ident, expose: &[Path]) -> proc_macro2::TokenStream {
    let checks = expose.iter().map(|interface| {
        quote! {
            const _: () = {
                fn assert_provides(value: &#struct_name) -> &dyn #interface {
                    value
                }
            };
        }
    });

    quote! {
        #(#checks)*
    }
}

/// 生成 DeclaredService trait 实现
fn generate_declared_service_impl(
    struct_name: &Ident,
    service_name: &str,
    lifetime: &proc_macro2::TokenStream,
    expose: &[Path],
) -> proc_macro2::TokenStream {
    let provides = expose.iter().map(|interface| {
        quote! { .provides::<dyn #interface>() }
    });

    quote! {
        impl registration_common::DeclaredService for #struct_name {
            fn service_name() -> &'static str {
                #service_name
            }

            fn lifetime() -> registration_common::Lifetime {
                #lifetime
            }

            fn descriptor() -> registration_common::ServiceDescriptor {
                registration_common::ServiceDescriptor::new::<#struct_name>(module_path!(), #lifetime)
                    .with_name(#service_name)
                    #(#provides)*
            }
        }
    }
}

/// 生成启动时自动提交声明的代码
fn generate_ctor_registration(struct_name: &Ident) -> proc_macro2::TokenStream {
    let declare_fn_name = Ident::new(
        &format!(
            "__declare_service_{}",
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );

    quote! {
        // 使用 ctor 在程序启动时自动提交服务声明
        #[ctor::ctor]
        fn #declare_fn_name() {
            registration_common::submit_declaration(
                <#struct_name as registration_common::DeclaredService>::descriptor(),
            );
        }
    }
}
